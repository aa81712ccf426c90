//! The embedded stylesheet's color palette.
//!
//! [`Palette`] names the six colors the document skeleton's stylesheet uses.
//! `Default` is the canonical palette, so out of the box every render
//! produces the same bytes; hosts that want their own colors construct a
//! palette by hand or load one from YAML.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Colors used by the embedded stylesheet, as CSS color strings.
///
/// # YAML
///
/// Palettes load from YAML with one key per field; missing keys fall back to
/// the defaults:
///
/// ```rust
/// use tabella::Palette;
///
/// let palette = Palette::from_yaml("header_bg: \"#0B3D2E\"\n").unwrap();
/// assert_eq!(palette.header_bg, "#0B3D2E");
/// assert_eq!(palette.row_hover, Palette::default().row_hover);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Header band background.
    pub header_bg: String,
    /// Header text color.
    pub header_text: String,
    /// Background of odd (first, third, ...) data rows.
    pub row_odd: String,
    /// Background of even data rows.
    pub row_even: String,
    /// Row background under the pointer.
    pub row_hover: String,
    /// Divider line between rows.
    pub row_divider: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            header_bg: "#1F3A5F".to_string(),
            header_text: "#FFFFFF".to_string(),
            row_odd: "#E6F0FF".to_string(),
            row_even: "#F8FAFC".to_string(),
            row_hover: "#D3E2F5".to_string(),
            row_divider: "#EEF2F7".to_string(),
        }
    }
}

impl Palette {
    /// Loads a palette from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SerializationError`] if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
