//! Expansion options.

use serde::{Deserialize, Serialize};

use crate::units::{is_px, parse_float};
use crate::{Error, Result};

/// Message of the error raised for a non-pixel root size.
pub const ROOT_SIZE_UNIT: &str = "rootSize option must be in pixel unit.";

/// Message of the error raised for a zero or negative root size.
pub const ROOT_SIZE_POSITIVE: &str = "rootSize option must be greater than zero.";

/// Options accepted by the expander.
///
/// Keys use the camelCase names stylesheet tooling expects, so options can be
/// read straight from JSON or TOML:
///
/// ```
/// use type_shorthand_expand::ExpandOptions;
///
/// let options: ExpandOptions = serde_json::from_str(r#"{ "rootSize": "16px" }"#).unwrap();
/// assert_eq!(options.root_size(), Some("16px"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpandOptions {
    /// Root font size used to convert pixel font sizes to `rem`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_size: Option<String>,
}

impl ExpandOptions {
    /// Options with every setting left at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root font size (for example `"16px"`).
    pub fn with_root_size(mut self, root_size: impl Into<String>) -> Self {
        self.root_size = Some(root_size.into());
        self
    }

    /// The configured root size. An empty string counts as unset.
    pub fn root_size(&self) -> Option<&str> {
        self.root_size.as_deref().filter(|size| !size.is_empty())
    }

    /// Check the options before a pass.
    pub fn validate(&self) -> Result<()> {
        match self.root_size() {
            Some(size) if !is_px(size) => Err(Error::config(ROOT_SIZE_UNIT)),
            Some(size) if !parse_float(size).is_some_and(|px| px > 0.0) => {
                Err(Error::config(ROOT_SIZE_POSITIVE))
            }
            _ => Ok(()),
        }
    }
}
