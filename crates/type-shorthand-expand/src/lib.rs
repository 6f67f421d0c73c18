//! Typography shorthand expansion.
//!
//! Recognizes `@type <media>? <font-size> <line-height>? <letter-spacing>?`
//! (and the `type: ...` declaration form) and rewrites it into standard CSS:
//!
//! - **Unit conversion**: pixel line heights become unitless ratios, pixel
//!   letter spacings become `em`, and with a root size pixel font sizes
//!   become `rem`
//! - **Custom media**: a leading `--name` wraps the result in
//!   `@media (--name) { ... }`
//! - **Skipping**: `/` leaves a position out
//!
//! # Example
//!
//! ```
//! use type_shorthand_core::{parse_css, to_css};
//! use type_shorthand_expand::{expand, ExpandOptions};
//!
//! let mut doc = parse_css("@type --s 10px 15px;").unwrap();
//! expand(&mut doc, &ExpandOptions::default()).unwrap();
//!
//! assert_eq!(
//!     to_css(&doc),
//!     "@media (--s) {\n    font-size: 10px;\n    line-height: 1.5\n}"
//! );
//! ```

pub mod expander;
pub mod options;
pub mod shorthand;
pub mod units;

mod error;

pub use error::{Error, Result};
pub use expander::{expand, ExpandReport, ShorthandExpander, MISSING_DECLARATIONS};
pub use options::{ExpandOptions, ROOT_SIZE_POSITIVE, ROOT_SIZE_UNIT};
pub use shorthand::{ParsedShorthand, TypographyValues, SKIP_MARKER};

/// Target names for log filtering.
pub mod targets {
    /// Expansion pass target.
    pub const EXPANDER: &str = "type_shorthand_expand::expander";
}
