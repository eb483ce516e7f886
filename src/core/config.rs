use super::model::Model;
use crate::error::DemucsResult;

/// Device used when none is given
pub const DEFAULT_DEVICE: &str = "cpu";

/// Model and device a separator runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparationConfig {
    model: Model,
    device: String,
}

impl SeparationConfig {
    /// Create a configuration, rejecting unsupported model names
    ///
    /// The device string is passed to demucs untouched.
    pub fn new(model: &str, device: impl Into<String>) -> DemucsResult<Self> {
        Ok(SeparationConfig {
            model: model.parse()?,
            device: device.into(),
        })
    }

    /// Create a configuration from an already validated model
    pub fn from_model(model: Model, device: impl Into<String>) -> Self {
        SeparationConfig {
            model,
            device: device.into(),
        }
    }

    /// Get the model
    pub fn model(&self) -> Model {
        self.model
    }

    /// Get the device
    pub fn device(&self) -> &str {
        &self.device
    }
}

impl Default for SeparationConfig {
    fn default() -> Self {
        SeparationConfig::from_model(Model::default(), DEFAULT_DEVICE)
    }
}
