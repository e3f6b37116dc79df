use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RebuildConfig {
    /// Extra radius, in Ångströms, added to the cutoff for the broad-phase search.
    pub broad_phase_padding: f64,
    /// Resize the graph to the coordinate source instead of rejecting a count mismatch.
    pub resize_to_source: bool,
    /// Reject sources containing NaN or infinite coordinates.
    pub validate_coordinates: bool,
}

impl Default for RebuildConfig {
    fn default() -> Self {
        Self {
            broad_phase_padding: 0.5,
            resize_to_source: false,
            validate_coordinates: true,
        }
    }
}

#[derive(Default)]
pub struct RebuildConfigBuilder {
    broad_phase_padding: Option<f64>,
    resize_to_source: Option<bool>,
    validate_coordinates: Option<bool>,
}

impl RebuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broad_phase_padding(mut self, padding: f64) -> Self {
        self.broad_phase_padding = Some(padding);
        self
    }
    pub fn resize_to_source(mut self, resize: bool) -> Self {
        self.resize_to_source = Some(resize);
        self
    }
    pub fn validate_coordinates(mut self, validate: bool) -> Self {
        self.validate_coordinates = Some(validate);
        self
    }

    pub fn build(self) -> Result<RebuildConfig, ConfigError> {
        let broad_phase_padding = self
            .broad_phase_padding
            .ok_or(ConfigError::MissingParameter("broad_phase_padding"))?;
        if !broad_phase_padding.is_finite() || broad_phase_padding < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "broad_phase_padding",
                reason: format!("expected a finite, non-negative distance, got {broad_phase_padding}"),
            });
        }

        Ok(RebuildConfig {
            broad_phase_padding,
            resize_to_source: self.resize_to_source.unwrap_or(false),
            validate_coordinates: self.validate_coordinates.unwrap_or(true),
        })
    }
}
