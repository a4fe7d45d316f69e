//! Blade colour transformer
//!
//! Holds one base colour and derives blended, lightened or darkened
//! colours from it. Every operation returns a new 6-digit lowercase hex
//! string; the base colour is never modified.

use tracing::debug;

use crate::error::BladeError;
use crate::utils::color::{decode_hex, encode_hex, mix, strip_hash};

/// Tone that `lighten` moves towards
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Tone that `darken` moves towards
pub const BLACK: [u8; 3] = [0, 0, 0];

/// Colour transformer over a single base colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blade {
    /// Base colour without the leading `#`
    color: String,
}

impl Blade {
    /// Create a transformer for `color`
    ///
    /// The colour is only validated when an operation decodes it.
    pub fn new(color: &str) -> Self {
        Self {
            color: strip_hash(color).to_string(),
        }
    }

    /// Normalized base colour
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Blend the base colour with `other`
    ///
    /// `percent` 0.0 keeps the base colour, 1.0 yields `other`. Values
    /// outside that range extrapolate and are clamped per channel.
    ///
    /// # Errors
    /// `InvalidColorFormat` if either colour is not 6 hex digits.
    pub fn blend(&self, other: &str, percent: f64) -> Result<String, BladeError> {
        let tone = decode_hex(other)?;
        self.towards(tone, percent)
    }

    /// Lighten the base colour towards white
    ///
    /// # Errors
    /// `InvalidColorFormat` if the base colour is not 6 hex digits.
    pub fn lighten(&self, percent: f64) -> Result<String, BladeError> {
        self.towards(WHITE, percent)
    }

    /// Darken the base colour towards black
    ///
    /// # Errors
    /// `InvalidColorFormat` if the base colour is not 6 hex digits.
    pub fn darken(&self, percent: f64) -> Result<String, BladeError> {
        self.towards(BLACK, percent)
    }

    fn towards(&self, tone: [u8; 3], percent: f64) -> Result<String, BladeError> {
        let base = decode_hex(&self.color)?;
        let result = mix(base, tone, percent);
        debug!(?base, ?tone, percent, ?result, "mixed channels");
        Ok(encode_hex(result))
    }
}
