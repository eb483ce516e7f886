//! Core separation types

/// Separator configuration
pub mod config;
/// Supported demucs models
pub mod model;
/// Stems and stem files
pub mod stem;

pub use config::{DEFAULT_DEVICE, SeparationConfig};
pub use model::Model;
pub use stem::{Stem, StemInfo, StemMap};
