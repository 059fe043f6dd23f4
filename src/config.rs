//! Layout options, their defaults, and validation into a [`LayoutConfig`].
//!
//! Options deserialize from camelCase JSON with every field optional;
//! unknown keys are rejected:
//!
//! ```json
//! { "fixedRatio": true, "bigPercentage": 0.75, "animate": { "duration": 300 } }
//! ```

use crate::error::ConfigError;
use crate::ratio::RatioBand;
use crate::transition::Easing;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Duration used when animation is switched on without one.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(200);

/// Caller-facing layout options. Ratios are height divided by width.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutOptions {
    pub max_ratio: f64,
    pub min_ratio: f64,
    /// Pin ordinary tiles to their content's natural shape.
    pub fixed_ratio: bool,
    pub big_max_ratio: f64,
    pub big_min_ratio: f64,
    pub big_fixed_ratio: bool,
    /// Share of the split axis given to the big tile, in (0, 1).
    pub big_percentage: f64,
    /// Big tile on the left/top edge rather than right/bottom.
    pub big_first: bool,
    pub animate: Animate,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_ratio: 3.0 / 2.0,
            min_ratio: 9.0 / 16.0,
            fixed_ratio: false,
            big_max_ratio: 3.0 / 2.0,
            big_min_ratio: 9.0 / 16.0,
            big_fixed_ratio: false,
            big_percentage: 0.8,
            big_first: true,
            animate: Animate::default(),
        }
    }
}

/// `false`, `true` (default duration) or a detailed setting.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Animate {
    Enabled(bool),
    Custom(AnimateOptions),
}

impl Default for Animate {
    fn default() -> Self {
        Animate::Enabled(false)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AnimateOptions {
    /// Milliseconds.
    #[serde(rename = "duration", alias = "durationMs")]
    pub duration_ms: Option<u64>,
    pub easing: Easing,
}

impl Animate {
    pub fn with_duration(duration: Duration) -> Self {
        Animate::Custom(AnimateOptions {
            duration_ms: Some(duration.as_millis() as u64),
            easing: Easing::Linear,
        })
    }

    /// Transition length; zero means rects are applied directly.
    pub fn duration(&self) -> Duration {
        match self {
            Animate::Enabled(false) => Duration::ZERO,
            Animate::Enabled(true) => DEFAULT_ANIMATION,
            Animate::Custom(opts) => opts
                .duration_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_ANIMATION),
        }
    }

    pub fn easing(&self) -> Easing {
        match self {
            Animate::Enabled(_) => Easing::Linear,
            Animate::Custom(opts) => opts.easing,
        }
    }
}

/// Validated, immutable snapshot of [`LayoutOptions`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub band: RatioBand,
    pub fixed_ratio: bool,
    pub big_band: RatioBand,
    pub big_fixed_ratio: bool,
    pub big_percentage: f64,
    pub big_first: bool,
    pub duration: Duration,
    pub easing: Easing,
}

impl LayoutConfig {
    /// Band for ordinary tiles whose content has shape `natural`.
    pub fn ordinary_band(&self, natural: f64) -> RatioBand {
        if self.fixed_ratio {
            RatioBand::fixed(natural)
        } else {
            self.band
        }
    }

    /// Band for the big tile whose content has shape `natural`.
    pub fn big_band(&self, natural: f64) -> RatioBand {
        if self.big_fixed_ratio {
            RatioBand::fixed(natural)
        } else {
            self.big_band
        }
    }
}

impl LayoutOptions {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject settings that would produce negative or inverted geometry.
    pub fn validate(&self) -> Result<LayoutConfig, ConfigError> {
        let band = checked_band(
            "ordinary",
            "min_ratio",
            self.min_ratio,
            "max_ratio",
            self.max_ratio,
        )?;
        let big_band = checked_band(
            "big",
            "big_min_ratio",
            self.big_min_ratio,
            "big_max_ratio",
            self.big_max_ratio,
        )?;

        if !(self.big_percentage > 0.0 && self.big_percentage < 1.0) {
            return Err(ConfigError::BigPercentageOutOfRange(self.big_percentage));
        }

        Ok(LayoutConfig {
            band,
            fixed_ratio: self.fixed_ratio,
            big_band,
            big_fixed_ratio: self.big_fixed_ratio,
            big_percentage: self.big_percentage,
            big_first: self.big_first,
            duration: self.animate.duration(),
            easing: self.animate.easing(),
        })
    }
}

fn checked_band(
    scope: &'static str,
    min_field: &'static str,
    min: f64,
    max_field: &'static str,
    max: f64,
) -> Result<RatioBand, ConfigError> {
    for (field, value) in [(min_field, min), (max_field, max)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::InvalidRatio { field, value });
        }
    }
    if min > max {
        return Err(ConfigError::InvertedRatioBand { scope, min, max });
    }
    Ok(RatioBand::new(min, max))
}
