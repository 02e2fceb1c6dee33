use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Name of the font used for every plot text unless configured otherwise.
pub const DEFAULT_FONT: &str = "Times-Roman";

pub const PLOT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Construction-time defaults for a [`crate::api::Plot`].
///
/// All lengths are device units (points for vector surfaces, pixels for
/// raster ones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub default_font: String,
    pub title_font_size: f64,
    pub axis_label_font_size: f64,
    pub tick_label_font_size: f64,
    pub legend_font_size: f64,
    /// Gap left between an axis and the data area.
    pub axis_padding: f64,
    pub tick_length: f64,
    pub axis_line_width: f64,
    pub legend_thumbnail_width: f64,
    /// Right margin reserved when a secondary Y axis is present.
    pub secondary_axis_margin: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            default_font: DEFAULT_FONT.to_owned(),
            title_font_size: 12.0,
            axis_label_font_size: 12.0,
            tick_label_font_size: 10.0,
            legend_font_size: 12.0,
            axis_padding: 5.0,
            tick_length: 8.0,
            axis_line_width: 0.5,
            legend_thumbnail_width: 20.0,
            secondary_axis_margin: 72.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PlotConfigJsonContractV1 {
    schema_version: u32,
    config: PlotConfig,
}

impl PlotConfig {
    pub fn validate(&self) -> PlotResult<()> {
        if self.default_font.trim().is_empty() {
            return Err(PlotError::InvalidConfig(
                "default font name must not be empty".to_owned(),
            ));
        }

        for (field, value) in [
            ("title_font_size", self.title_font_size),
            ("axis_label_font_size", self.axis_label_font_size),
            ("tick_label_font_size", self.tick_label_font_size),
            ("legend_font_size", self.legend_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "`{field}` must be finite and > 0"
                )));
            }
        }

        for (field, value) in [
            ("axis_padding", self.axis_padding),
            ("tick_length", self.tick_length),
            ("axis_line_width", self.axis_line_width),
            ("legend_thumbnail_width", self.legend_thumbnail_width),
            ("secondary_axis_margin", self.secondary_axis_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "`{field}` must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        let payload = PlotConfigJsonContractV1 {
            schema_version: PLOT_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses either a bare config object or a versioned contract payload.
    ///
    /// Missing fields fall back to [`PlotConfig::default`]. The parsed config
    /// is validated before it is returned.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to parse config json: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: PlotConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidConfig(format!("failed to parse config payload: {e}"))
            })?;
            if payload.schema_version != PLOT_CONFIG_JSON_SCHEMA_V1 {
                return Err(PlotError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| PlotError::InvalidConfig(format!("failed to parse config: {e}")))?
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FONT, PlotConfig};

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = PlotConfig::from_json_str(r#"{ "tick_length": 4.0 }"#).expect("parse");
        assert_eq!(config.tick_length, 4.0);
        assert_eq!(config.default_font, DEFAULT_FONT);
        assert_eq!(config.secondary_axis_margin, 72.0);
    }

    #[test]
    fn versioned_payload_round_trips() {
        let config = PlotConfig {
            legend_font_size: 9.0,
            ..PlotConfig::default()
        };
        let json = config.to_json_pretty().expect("serialize");
        let parsed = PlotConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn unsupported_schema_version_is_rejected() {
        let result = PlotConfig::from_json_str(r#"{ "schema_version": 9, "config": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn negative_lengths_are_rejected() {
        let result = PlotConfig::from_json_str(r#"{ "axis_padding": -1.0 }"#);
        assert!(result.is_err());
    }
}
