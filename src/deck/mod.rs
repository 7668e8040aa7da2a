//! Deck outline model.
//!
//! A [`Deck`] is the structured outline handed over by the external content
//! generator: a presentation title plus one [`SlideSpec`] per output slide.
//! The generator emits JSON and is not always well behaved, so
//! deserialization coerces rather than rejects: missing fields default, a
//! bare string `content` becomes a one-element list, and non-string content
//! items are converted to their display text.
//!
//! Repairing syntactically broken JSON (stray markdown fences, single
//! quotes, trailing commas) is the generator's job, not this crate's; by the
//! time a deck reaches [`Deck::from_json`] it must at least parse.
//!
//! # Examples
//!
//! ```rust
//! use deckgen::Deck;
//!
//! let deck = Deck::from_json(
//!     r#"{
//!         "title": "Quarterly Review",
//!         "slides": [
//!             {"title": "Agenda", "content": ["Results", "Outlook"], "notes": "Keep it short"}
//!         ]
//!     }"#,
//! )?;
//! assert_eq!(deck.slides.len(), 1);
//! assert_eq!(deck.slides[0].content[0], "Results");
//! # Ok::<(), deckgen::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::Result;

/// A complete deck outline: presentation title plus ordered slide specs.
///
/// Produced once by the external content generator and consumed read-only by
/// the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Presentation title, used for the opening title slide
    #[serde(default)]
    pub title: String,
    /// Content slides in presentation order
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

impl Deck {
    /// Create an empty deck with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }

    /// Decode a deck from the JSON interchange format.
    ///
    /// Field coercion is applied during decoding (see the module docs); a
    /// syntactically invalid document is the only failure mode.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One slide of the outline: title, bullet lines, optional speaker notes.
///
/// Content lines are insertion-ordered and may be empty; an empty line still
/// occupies one line of body height.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Slide title text
    #[serde(default)]
    pub title: String,
    /// Bullet lines, one entry per paragraph
    #[serde(default, deserialize_with = "coerce_content")]
    pub content: Vec<String>,
    /// Speaker notes, persisted verbatim by the writer
    #[serde(default)]
    pub notes: Option<String>,
}

impl SlideSpec {
    /// Create a slide spec with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            notes: None,
        }
    }

    /// Set the content lines.
    pub fn with_content<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the speaker notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A content field as the generator may emit it: a list or a single scalar.
///
/// Untagged variants are tried in declaration order, and the scalar path ends
/// in a catch-all that would swallow a JSON array whole, so the list variant
/// must come first.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentField {
    Many(Vec<ContentItem>),
    One(ContentItem),
}

/// A single content item, coerced to text.
///
/// Strings pass through unchanged; numbers and booleans render as their
/// display text; null becomes an empty line. Anything structured falls back
/// to its compact JSON rendering so no information is silently dropped.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentItem {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Other(serde_json::Value),
}

impl ContentItem {
    fn into_string(self) -> String {
        match self {
            ContentItem::Text(s) => s,
            ContentItem::Int(n) => n.to_string(),
            ContentItem::Float(n) => n.to_string(),
            ContentItem::Bool(b) => b.to_string(),
            ContentItem::Other(serde_json::Value::Null) => String::new(),
            ContentItem::Other(value) => value.to_string(),
        }
    }
}

fn coerce_content<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<ContentField>::deserialize(deserializer)?;
    Ok(match field {
        None => Vec::new(),
        Some(ContentField::One(item)) => vec![item.into_string()],
        Some(ContentField::Many(items)) => {
            items.into_iter().map(ContentItem::into_string).collect()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck() {
        let deck = Deck::from_json(
            r#"{
                "title": "Bài thuyết trình",
                "slides": [
                    {"title": "Mở đầu", "content": ["Ý chính 1", "Ý chính 2"], "notes": "chào"},
                    {"title": "Kết luận", "content": []}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(deck.title, "Bài thuyết trình");
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].notes.as_deref(), Some("chào"));
        assert!(deck.slides[1].content.is_empty());
        assert_eq!(deck.slides[1].notes, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let deck = Deck::from_json(r#"{"slides": [{}]}"#).unwrap();
        assert_eq!(deck.title, "");
        assert_eq!(deck.slides[0].title, "");
        assert!(deck.slides[0].content.is_empty());
    }

    #[test]
    fn test_list_content_stays_element_wise() {
        // A plain string array is the normal generator output; it must never
        // collapse into one item holding the list's JSON rendering.
        let deck = Deck::from_json(r#"{"slides": [{"content": ["a", "b"]}]}"#).unwrap();
        assert_eq!(deck.slides[0].content, vec!["a", "b"]);
    }

    #[test]
    fn test_bare_string_content_becomes_list() {
        let deck =
            Deck::from_json(r#"{"slides": [{"title": "T", "content": "single line"}]}"#).unwrap();
        assert_eq!(deck.slides[0].content, vec!["single line"]);
    }

    #[test]
    fn test_non_string_items_coerced() {
        let deck = Deck::from_json(
            r#"{"slides": [{"content": ["text", 42, 3.5, true, null]}]}"#,
        )
        .unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec!["text", "42", "3.5", "true", ""]
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Deck::from_json("{not json").is_err());
    }

    #[test]
    fn test_builder() {
        let slide = SlideSpec::new("Agenda")
            .with_content(["a", "b"])
            .with_notes("speak slowly");
        assert_eq!(slide.content.len(), 2);
        assert_eq!(slide.notes.as_deref(), Some("speak slowly"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut deck = Deck::new("Demo");
        deck.slides.push(SlideSpec::new("S1").with_content(["x"]));
        let json = serde_json::to_string(&deck).unwrap();
        assert_eq!(Deck::from_json(&json).unwrap(), deck);
    }
}
