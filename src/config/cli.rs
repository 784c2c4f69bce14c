use crate::adapters::report::OutputFormat;
use crate::config::settings::Settings;
use crate::domain::model::Credential;
use crate::utils::error::{AppError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "keyword-variations", version)]
#[command(about = "Generate conversational variations of keywords with the Gemini API")]
pub struct CliConfig {
    /// Keywords to expand. An argument may hold several lines, one keyword each.
    #[arg(value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// File with one keyword per line; `-` reads standard input
    #[arg(long, value_name = "PATH")]
    pub keywords_file: Option<PathBuf>,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML config file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Overlays every flag that was given. A key that was given but is blank
    /// counts as missing; the config file key is not used in its place.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(key) = self.api_key.as_deref() {
            let credential = Credential::new(key).ok_or_else(|| AppError::MissingConfigError {
                field: "api_key".to_string(),
            })?;
            settings.credential = Some(credential);
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(path) = &self.output {
            settings.output_path = Some(path.clone());
        }
        Ok(())
    }
}
