use crate::color::Rgb;
use crate::interpolate::Easing;
use crate::render::StrokeStyle;
use crate::sizing::GlyphSizing;

/// Construction-time settings for a [`GlyphView`](crate::GlyphView).
///
/// Every field has a default, so partial TOML documents are accepted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    pub color: Rgb,
    pub stroke_width: f64,
    /// Length of one transition in milliseconds
    pub duration_ms: u32,
    /// Tick rate of the bundled timeline
    pub fps: u32,
    pub easing: Easing,
    pub sizing: GlyphSizing,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            stroke_width: 2.0,
            duration_ms: 300,
            fps: 60,
            easing: Easing::default(),
            sizing: GlyphSizing::default(),
        }
    }
}

impl ViewConfig {
    /// Parse a TOML string into `ViewConfig`.
    ///
    /// ```rust,ignore
    /// let config = ViewConfig::from_toml_str("color = \"#336699\"\nstroke_width = 4.0")?;
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Builder-style color override.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Builder-style stroke width override. Negative widths become zero.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Builder-style duration override.
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Stroke settings derived from this config.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            width: self.stroke_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stroke() {
        let config = ViewConfig::default();
        let style = config.stroke_style();
        assert_eq!(style.color, Rgb::BLACK);
        assert_eq!(style.width, 2.0);
        assert_eq!(config.duration_ms, 300);
        assert_eq!(config.easing, Easing::AccelerateDecelerate);
    }

    #[test]
    fn builder_overrides() {
        let config = ViewConfig::default()
            .with_color(Rgb(255, 0, 0))
            .with_stroke_width(-3.0)
            .with_duration_ms(500);
        assert_eq!(config.color, Rgb(255, 0, 0));
        assert_eq!(config.stroke_width, 0.0);
        assert_eq!(config.duration_ms, 500);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn partial_toml() {
        let config = ViewConfig::from_toml_str("color = \"red\"\nstroke_width = 4.0\n").unwrap();
        assert_eq!(config.color, Rgb(255, 0, 0));
        assert_eq!(config.stroke_width, 4.0);
        assert_eq!(config.fps, 60);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn invalid_toml_color() {
        assert!(ViewConfig::from_toml_str("color = \"notacolor\"\n").is_err());
    }
}
