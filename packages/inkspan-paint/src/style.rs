use color::{AlphaColor, Srgb, parse_color};
use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Resolved color type, the `color` crate's sRGB color with alpha.
pub type Color = AlphaColor<Srgb>;

/// Raw decoration configuration as supplied by the host.
///
/// All keys are optional; key names match the host-facing style prop.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpanConfig {
    /// CSS-style color string for the fill behind the span.
    pub background_color: Option<String>,
    /// CSS-style color string for the border stroke.
    pub border_color: Option<String>,
    /// Corner radius in logical pixels.
    pub border_radius: Option<f64>,
    /// Stroke width in logical pixels.
    pub border_width: Option<f64>,
}

/// Triggered when a [`SpanConfig`] cannot be resolved into a [`SpanStyle`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StyleError {
    #[error("invalid color {value:?} for {key}: {source}")]
    InvalidColor {
        key: &'static str,
        value: String,
        source: color::ParseError,
    },
}

/// Resolved style values, in device pixels.
///
/// Unset colors are fully transparent and unset dimensions are zero, so a
/// default config yields a decoration that computes valid geometry but paints
/// invisibly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanStyle {
    pub background_color: Color,
    pub border_color: Color,
    /// Corner radius, device pixels.
    pub border_radius: f64,
    /// Stroke width, device pixels.
    pub border_width: f64,
}

impl Default for SpanStyle {
    fn default() -> Self {
        Self {
            background_color: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            border_radius: 0.0,
            border_width: 0.0,
        }
    }
}

impl SpanStyle {
    /// Resolves a raw config against a device scale factor.
    ///
    /// `scale` converts logical pixel values to device pixels. Missing keys
    /// fall back to transparent/zero; malformed color strings are an error.
    /// Negative dimensions are clamped to zero.
    pub fn resolve(config: &SpanConfig, scale: f64) -> Result<Self, StyleError> {
        Ok(Self {
            background_color: resolve_color(
                "backgroundColor",
                config.background_color.as_deref(),
            )?,
            border_color: resolve_color("borderColor", config.border_color.as_deref())?,
            border_radius: resolve_length("borderRadius", config.border_radius, scale),
            border_width: resolve_length("borderWidth", config.border_width, scale),
        })
    }

    /// True when neither the fill nor the stroke would be visible.
    pub fn is_invisible(&self) -> bool {
        self.background_color == Color::TRANSPARENT
            && (self.border_color == Color::TRANSPARENT || self.border_width == 0.0)
    }
}

fn resolve_color(key: &'static str, value: Option<&str>) -> Result<Color, StyleError> {
    match value {
        None => Ok(Color::TRANSPARENT),
        Some(value) => parse_color(value)
            .map(|c| c.to_alpha_color())
            .map_err(|source| StyleError::InvalidColor {
                key,
                value: value.to_string(),
                source,
            }),
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn resolve_length(key: &'static str, value: Option<f64>, scale: f64) -> f64 {
    let value = value.unwrap_or(0.0);
    if value < 0.0 {
        #[cfg(feature = "tracing")]
        warn!("ignoring negative {key} value {value}");
        return 0.0;
    }
    value * scale
}
