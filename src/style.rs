//! Callout style attributes: defaults, lenient application, strict parsing.
//!
//! Two layers consume the same attribute names:
//!
//! - [`CalloutStyle::from_attrs`] is lenient: malformed, negative or unknown
//!   entries are logged and replaced by the documented default. Hosts that
//!   inflate styles from loosely-typed attribute bags want this behavior.
//! - [`CalloutStyle::parse`] is strict: the first invalid entry in a
//!   `name = value` block is reported as a diagnostic with a source span.

use crate::errors::{SourceContext, StyleError};
use crate::types::{Color, Length, NumericError};

/// Default attribute values (style units).
pub mod defaults {
    use crate::types::{Color, Length};

    pub const SHADOW_SIZE: Length = Length::of(4.0);
    pub const ARROW_SIZE: Length = Length::of(24.0);
    pub const BODY_CORNER_RADIUS: Length = Length::of(24.0);
    pub const ARROW_CORNER_RADIUS: Length = Length::of(4.0);
    pub const SHADOW_OFFSET_Y: Length = Length::of(2.0);
    pub const SHADOW_COLOR: Color = Color::argb(0x80, 0x88, 0x88, 0x88);
    pub const FILL_COLOR: Color = Color::WHITE;
}

/// Configuration for the callout shape, immutable per draw cycle.
///
/// All lengths are in abstract style units; a [`crate::types::Scale`]
/// converts them to pixels at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct CalloutStyle {
    /// Blur radius of the drop shadow; also the inset reserved around the body.
    pub shadow_size: Length,
    /// Half-width of the arrow base and the arrow's height below the body.
    pub arrow_size: Length,
    /// Corner radius of the body rectangle, uniform on all four corners.
    pub body_corner_radius: Length,
    /// Rounding radius of the arrow tip; zero gives a sharp point.
    pub arrow_corner_radius: Length,
    /// Shadow color (usually translucent).
    pub shadow_color: Color,
    /// Vertical shadow offset; horizontal offset is always zero.
    pub shadow_offset_y: Length,
    /// Solid body fill.
    pub fill_color: Color,
}

impl Default for CalloutStyle {
    fn default() -> Self {
        CalloutStyle {
            shadow_size: defaults::SHADOW_SIZE,
            arrow_size: defaults::ARROW_SIZE,
            body_corner_radius: defaults::BODY_CORNER_RADIUS,
            arrow_corner_radius: defaults::ARROW_CORNER_RADIUS,
            shadow_color: defaults::SHADOW_COLOR,
            shadow_offset_y: defaults::SHADOW_OFFSET_Y,
            fill_color: defaults::FILL_COLOR,
        }
    }
}

/// The recognized attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attr {
    ShadowSize,
    ArrowSize,
    BodyCornerRadius,
    ArrowCornerRadius,
    ShadowColor,
    ShadowOffsetY,
    FillColor,
}

/// Canonical attribute names, for lookups and suggestions.
const ATTR_NAMES: &[(&str, Attr)] = &[
    ("shadowSize", Attr::ShadowSize),
    ("arrowSize", Attr::ArrowSize),
    ("bodyCornerRadius", Attr::BodyCornerRadius),
    ("arrowCornerRadius", Attr::ArrowCornerRadius),
    ("shadowColor", Attr::ShadowColor),
    ("shadowOffsetY", Attr::ShadowOffsetY),
    // Historical alias for shadowOffsetY
    ("shadowDeltaY", Attr::ShadowOffsetY),
    ("fillColor", Attr::FillColor),
];

impl Attr {
    fn lookup(name: &str) -> Option<Attr> {
        ATTR_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, attr)| *attr)
    }

    /// Suggest the canonical name for a near-miss (wrong case).
    fn suggest(name: &str) -> Option<String> {
        ATTR_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(n, _)| format!("did you mean `{}`?", n))
    }
}

impl CalloutStyle {
    /// Build a style from loosely-typed `(name, value)` attribute pairs.
    ///
    /// Never fails: malformed or negative values fall back to the documented
    /// default, unknown names are ignored. Both cases are logged when the
    /// `tracing` feature is enabled.
    pub fn from_attrs<'a, I>(attrs: I) -> CalloutStyle
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut style = CalloutStyle::default();
        for (name, value) in attrs {
            match Attr::lookup(name) {
                Some(attr) => style.apply_lenient(attr, name, value),
                None => {
                    crate::log::warn!("ignoring unknown callout attribute {:?}", name);
                }
            }
        }
        style
    }

    fn apply_lenient(&mut self, attr: Attr, name: &str, value: &str) {
        match attr {
            Attr::ShadowSize => {
                self.shadow_size = lenient_length(name, value, defaults::SHADOW_SIZE)
            }
            Attr::ArrowSize => self.arrow_size = lenient_length(name, value, defaults::ARROW_SIZE),
            Attr::BodyCornerRadius => {
                self.body_corner_radius =
                    lenient_length(name, value, defaults::BODY_CORNER_RADIUS)
            }
            Attr::ArrowCornerRadius => {
                self.arrow_corner_radius =
                    lenient_length(name, value, defaults::ARROW_CORNER_RADIUS)
            }
            Attr::ShadowOffsetY => {
                self.shadow_offset_y = lenient_length(name, value, defaults::SHADOW_OFFSET_Y)
            }
            Attr::ShadowColor => {
                self.shadow_color = lenient_color(name, value, defaults::SHADOW_COLOR)
            }
            Attr::FillColor => self.fill_color = lenient_color(name, value, defaults::FILL_COLOR),
        }
    }

    /// Parse a `name = value` attribute block, strictly.
    ///
    /// Blank lines and `#` comments are skipped. The first invalid entry is
    /// returned as a [`StyleError`] with a span into `text`; `source_name`
    /// labels the source in the rendered diagnostic.
    pub fn parse(source_name: &str, text: &str) -> Result<CalloutStyle, StyleError> {
        let ctx = SourceContext::new(source_name, text);
        let mut style = CalloutStyle::default();
        let mut offset = 0usize;

        for line in text.split('\n') {
            let line_start = offset;
            offset += line.len() + 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(eq) = line.find('=') else {
                return Err(StyleError::MalformedEntry {
                    src: ctx.named_source(),
                    span: trimmed_span(line_start, line),
                });
            };

            let (key_part, rest) = line.split_at(eq);
            let value_part = &rest[1..];
            let key = key_part.trim();
            let value = value_part.trim();
            if key.is_empty() || value.is_empty() {
                return Err(StyleError::MalformedEntry {
                    src: ctx.named_source(),
                    span: trimmed_span(line_start, line),
                });
            }

            let key_span = subspan(line_start, line, key);
            let value_span = subspan(line_start, line, value);

            match Attr::lookup(key) {
                Some(attr) => style.apply_strict(attr, value, &ctx, value_span)?,
                None => {
                    return Err(StyleError::UnknownAttribute {
                        name: key.to_string(),
                        src: ctx.named_source(),
                        span: key_span,
                        suggestion: Attr::suggest(key),
                    });
                }
            }
        }

        Ok(style)
    }

    fn apply_strict(
        &mut self,
        attr: Attr,
        value: &str,
        ctx: &SourceContext,
        span: miette::SourceSpan,
    ) -> Result<(), StyleError> {
        match attr {
            Attr::ShadowSize => self.shadow_size = strict_length(value, ctx, span)?,
            Attr::ArrowSize => self.arrow_size = strict_length(value, ctx, span)?,
            Attr::BodyCornerRadius => self.body_corner_radius = strict_length(value, ctx, span)?,
            Attr::ArrowCornerRadius => self.arrow_corner_radius = strict_length(value, ctx, span)?,
            Attr::ShadowOffsetY => self.shadow_offset_y = strict_length(value, ctx, span)?,
            Attr::ShadowColor => self.shadow_color = strict_color(value, ctx, span)?,
            Attr::FillColor => self.fill_color = strict_color(value, ctx, span)?,
        }
        Ok(())
    }
}

/// Span of `line` with surrounding whitespace trimmed, in whole-text offsets.
fn trimmed_span(line_start: usize, line: &str) -> miette::SourceSpan {
    let trimmed = line.trim();
    subspan(line_start, line, trimmed)
}

/// Span of `part` (a trimmed slice of `line`) in whole-text offsets.
fn subspan(line_start: usize, line: &str, part: &str) -> miette::SourceSpan {
    debug_assert!(!part.is_empty());
    // `part` borrows from `line`, so pointer arithmetic gives its offset.
    let start = part.as_ptr() as usize - line.as_ptr() as usize;
    (line_start + start, part.len()).into()
}

fn lenient_length(_name: &str, value: &str, default: Length) -> Length {
    match parse_length(value) {
        Ok(len) => len,
        Err(_err) => {
            crate::log::warn!(
                "bad value {:?} for callout attribute {:?} ({}), using default",
                value,
                _name,
                _err
            );
            default
        }
    }
}

fn lenient_color(_name: &str, value: &str, default: Color) -> Color {
    match value.parse::<Color>() {
        Ok(color) => color,
        Err(_err) => {
            crate::log::warn!(
                "bad value {:?} for callout attribute {:?} ({}), using default",
                value,
                _name,
                _err
            );
            default
        }
    }
}

fn strict_length(
    value: &str,
    ctx: &SourceContext,
    span: miette::SourceSpan,
) -> Result<Length, StyleError> {
    match parse_length(value) {
        Ok(len) => Ok(len),
        Err(LengthParseError::Negative) => Err(StyleError::NegativeLength {
            src: ctx.named_source(),
            span,
        }),
        Err(err) => Err(StyleError::InvalidLength {
            message: err.to_string(),
            src: ctx.named_source(),
            span,
        }),
    }
}

fn strict_color(
    value: &str,
    ctx: &SourceContext,
    span: miette::SourceSpan,
) -> Result<Color, StyleError> {
    value.parse::<Color>().map_err(|err| StyleError::InvalidColor {
        message: err.to_string(),
        src: ctx.named_source(),
        span,
    })
}

/// Why a length value was rejected.
#[derive(Debug, Clone, PartialEq)]
enum LengthParseError {
    NotANumber(String),
    Negative,
    NotFinite,
}

impl std::fmt::Display for LengthParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthParseError::NotANumber(msg) => write!(f, "{}", msg),
            LengthParseError::Negative => write!(f, "negative length"),
            LengthParseError::NotFinite => write!(f, "length must be finite"),
        }
    }
}

/// Parse a non-negative length in style units.
fn parse_length(value: &str) -> Result<Length, LengthParseError> {
    let raw: f64 = value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| LengthParseError::NotANumber(e.to_string()))?;
    match Length::try_non_negative(raw) {
        Ok(len) => Ok(len),
        Err(NumericError::Negative) => Err(LengthParseError::Negative),
        Err(_) => Err(LengthParseError::NotFinite),
    }
}
