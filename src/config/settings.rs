use crate::adapters::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECONDS};
use crate::adapters::report::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::model::Credential;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::path::PathBuf;
use std::time::Duration;

pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Effective settings after layering defaults, the config file and CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub credential: Option<Credential>,
    pub format: OutputFormat,
    pub output_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            credential: None,
            format: OutputFormat::default(),
            output_path: None,
        }
    }
}

impl Settings {
    /// Overlays every value the file sets.
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if let Some(credential) = file.api_key().and_then(Credential::new) {
            self.credential = Some(credential);
        }
        if let Some(model) = &file.gemini.model {
            self.model = model.clone();
        }
        if let Some(endpoint) = &file.gemini.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(timeout) = file.gemini.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(format) = file.output.format {
            self.format = format;
        }
        if let Some(path) = &file.output.path {
            self.output_path = Some(path.clone());
        }
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("model", &self.model)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}
