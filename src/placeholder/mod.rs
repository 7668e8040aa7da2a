//! Template region roles and title/body selection.
//!
//! A slide template offers a set of regions (placeholders), each tagged with
//! a role. The layout engine needs exactly two of them: the canonical title
//! region and the canonical body region. Selection is an explicit priority
//! table rather than a chain of type checks, which keeps the rule
//! independently testable and deterministic.

use serde::{Deserialize, Serialize};

/// The role a template region is intended for.
///
/// Mirrors the placeholder taxonomy of presentation containers, collapsed to
/// the roles the layout engine distinguishes; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceholderRole {
    /// Title placeholder
    Title,
    /// Center title placeholder (title-slide layouts)
    CenterTitle,
    /// Subtitle placeholder
    Subtitle,
    /// Body/content placeholder
    Body,
    /// Object placeholder (embedded objects, generic content)
    Object,
    /// Any other placeholder kind
    Other,
}

/// OOXML `<p:ph type="...">` attribute values, mapped to roles.
///
/// A `<p:ph>` element with no type attribute is a body placeholder by
/// convention, which [`PlaceholderRole::from_ooxml_type`] honors for the
/// empty string.
static OOXML_PH_TYPES: phf::Map<&'static str, PlaceholderRole> = phf::phf_map! {
    "title" => PlaceholderRole::Title,
    "ctrTitle" => PlaceholderRole::CenterTitle,
    "subTitle" => PlaceholderRole::Subtitle,
    "body" => PlaceholderRole::Body,
    "" => PlaceholderRole::Body,
    "obj" => PlaceholderRole::Object,
};

impl PlaceholderRole {
    /// Map an OOXML placeholder type string to a role.
    ///
    /// Unrecognized values (`dt`, `ftr`, `sldNum`, vendor extensions, ...)
    /// become [`PlaceholderRole::Other`].
    #[inline]
    pub fn from_ooxml_type(value: &str) -> Self {
        OOXML_PH_TYPES.get(value).copied().unwrap_or(Self::Other)
    }

    /// Whether this role can host the slide title.
    #[inline]
    pub fn is_title(&self) -> bool {
        matches!(self, Self::Title | Self::CenterTitle)
    }

    /// Whether this role is a first-priority body candidate.
    #[inline]
    pub fn is_body_candidate(&self) -> bool {
        matches!(self, Self::Body | Self::Object)
    }
}

/// Indices of the selected title and body regions within the offered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSelection {
    /// Index of the title region, if any was offered
    pub title: Option<usize>,
    /// Index of the body region, if any was offered
    pub body: Option<usize>,
}

/// Pick the canonical title and body regions from a template's offering.
///
/// The title is the first region with a title role. The body is chosen by
/// priority: a `Body`/`Object` region first, then the region at canonical
/// index 1, then the first remaining region without a title role. Ties
/// within a priority class are broken by first occurrence, so selection is
/// stable and deterministic. Either selection may be absent; a slide without
/// a body region is valid (title-only), and a slide without a title region
/// lays its body out from the top margin.
///
/// # Examples
///
/// ```rust
/// use deckgen::placeholder::{PlaceholderRole, select_title_and_body};
///
/// let regions = [
///     (PlaceholderRole::Title, "ph0"),
///     (PlaceholderRole::Body, "ph1"),
/// ];
/// let selection = select_title_and_body(&regions);
/// assert_eq!(selection.title, Some(0));
/// assert_eq!(selection.body, Some(1));
/// ```
pub fn select_title_and_body<H>(regions: &[(PlaceholderRole, H)]) -> RegionSelection {
    let title = regions.iter().position(|(role, _)| role.is_title());

    // Priority 0: a dedicated body-like region.
    let body = regions
        .iter()
        .enumerate()
        .find(|(index, (role, _))| Some(*index) != title && role.is_body_candidate())
        .map(|(index, _)| index)
        // Priority 1: the canonical second placeholder.
        .or_else(|| (regions.len() > 1 && title != Some(1)).then_some(1))
        // Priority 2: the first remaining non-title region.
        .or_else(|| {
            regions
                .iter()
                .enumerate()
                .find(|(index, (role, _))| Some(*index) != title && !role.is_title())
                .map(|(index, _)| index)
        });

    RegionSelection { title, body }
}
