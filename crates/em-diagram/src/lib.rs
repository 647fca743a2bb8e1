//! em-diagram: emagram background curves and upper-air soundings.
//!
//! - `config`: baseline grid and curve families, loaded from YAML
//! - `baseline`: dry adiabats, moist adiabats and saturation mixing ratio
//!   lines for the diagram background, exported as JSON
//! - `sounding`: University of Wyoming text listings parsed into typed
//!   levels, exported as JSON

pub mod baseline;
pub mod config;
pub mod sounding;

pub use baseline::{Baseline, BaselinePoint};
pub use config::BaselineConfig;
pub use sounding::{Sounding, SoundingLevel};

pub type DiagramResult<T> = Result<T, DiagramError>;

#[derive(thiserror::Error, Debug)]
pub enum DiagramError {
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Sounding listing has no data rows")]
    EmptySounding,

    #[error("Core error: {0}")]
    Core(#[from] em_core::EmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
