//! Unit conversion constants and helpers.
//!
//! All geometry in this crate is stored in EMUs (English Metric Units), the
//! native unit of presentation containers. Font metrics arrive in points, and
//! the calibrated layout constants are expressed in centimeters, so both
//! conversions are needed throughout the layout engine.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

#[inline]
pub fn cm_to_emu_f64(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64) as i64
}

#[inline]
pub fn emu_to_cm_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_CM as f64
}
