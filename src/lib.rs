pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{Settings, TomlConfig};

pub use adapters::{gemini::GeminiClient, notify::StderrBanner, report::OutputFormat};
pub use crate::core::{engine::VariationEngine, variation::VariationGenerator};
pub use domain::model::{Credential, Keyword, KeywordReport, VariationResult};
pub use utils::error::{AppError, Result, ServiceError};
