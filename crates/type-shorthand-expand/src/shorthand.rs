//! Parsing and resolving a single `type` shorthand value.

use crate::units::{format_number, is_custom_media, is_px, px_to_em, px_to_ratio, px_to_rem};

/// Placeholder that skips a position in the shorthand.
pub const SKIP_MARKER: &str = "/";

/// The fragments of one `<media>? <font-size> <line-height>? <letter-spacing>?`
/// value, before any unit conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedShorthand<'a> {
    /// Custom media query name, including the leading `--`.
    pub media: Option<&'a str>,
    pub font_size: Option<&'a str>,
    pub line_height: Option<&'a str>,
    pub letter_spacing: Option<&'a str>,
}

impl<'a> ParsedShorthand<'a> {
    /// Split a raw value on whitespace and assign the fragments.
    ///
    /// Fragments after the fourth (third without a media query) are ignored.
    pub fn parse(raw: &'a str) -> Self {
        let mut frags = raw.split_whitespace().peekable();
        let media = frags.next_if(|frag| is_custom_media(frag));

        Self {
            media,
            font_size: frags.next(),
            line_height: frags.next(),
            letter_spacing: frags.next(),
        }
    }
}

/// Declaration values after unit conversion.
///
/// A field is `None` when its fragment was absent. A field holding the skip
/// marker is kept as-is; [`TypographyValues::declarations`] filters it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypographyValues {
    pub font_size: Option<String>,
    pub line_height: Option<String>,
    pub letter_spacing: Option<String>,
}

impl TypographyValues {
    /// Apply unit conversions to a parsed shorthand.
    ///
    /// With a pixel font size as reference, pixel line heights become unitless
    /// ratios and pixel letter spacings become `em`. With a root size, a pixel
    /// font size becomes `rem`. Values that cannot be converted are kept raw.
    pub fn resolve(shorthand: &ParsedShorthand<'_>, root_size: Option<&str>) -> Self {
        let font_size = shorthand.font_size;
        let mut line_height = shorthand.line_height.map(str::to_string);
        let mut letter_spacing = shorthand.letter_spacing.map(str::to_string);

        if let Some(reference) = font_size.filter(|fs| *fs != SKIP_MARKER) {
            if let Some(lh) = shorthand.line_height.filter(|v| is_px(v))
                && let Some(ratio) = px_to_ratio(lh, reference)
            {
                line_height = Some(format_number(ratio));
            }
            if let Some(ls) = shorthand.letter_spacing.filter(|v| is_px(v))
                && let Some(em) = px_to_em(ls, reference)
            {
                letter_spacing = Some(em);
            }
        }

        let font_size = match (font_size, root_size) {
            (Some(fs), Some(root)) if is_px(fs) => {
                Some(px_to_rem(fs, root).unwrap_or_else(|| fs.to_string()))
            }
            (fs, _) => fs.map(str::to_string),
        };

        Self {
            font_size,
            line_height,
            letter_spacing,
        }
    }

    /// The declarations to generate, in font-size, line-height,
    /// letter-spacing order, without absent, empty or skipped values.
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        [
            ("font-size", self.font_size.as_deref()),
            ("line-height", self.line_height.as_deref()),
            ("letter-spacing", self.letter_spacing.as_deref()),
        ]
        .into_iter()
        .filter_map(|(property, value)| match value {
            Some(value) if !value.is_empty() && value != SKIP_MARKER => Some((property, value)),
            _ => None,
        })
        .collect()
    }
}
