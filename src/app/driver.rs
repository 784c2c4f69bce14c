use crate::adapters::gemini::GeminiClient;
use crate::adapters::notify::StderrBanner;
use crate::adapters::report;
use crate::config::{CliConfig, Settings, TomlConfig};
use crate::core::engine::VariationEngine;
use crate::core::variation::VariationGenerator;
use crate::domain::model::{Credential, Keyword, KeywordReport};
use crate::domain::ports::{ErrorChannel, TextGenerator};
use crate::utils::error::{AppError, Result};
use crate::utils::input::read_keyword_sources;
use crate::utils::validation::Validate;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

pub const NO_KEYWORDS_MESSAGE: &str = "Please enter at least one keyword.";

/// Everything a run needs once the command line has been checked.
#[derive(Debug)]
pub struct Job {
    pub settings: Settings,
    pub credential: Credential,
    pub keywords: Vec<Keyword>,
}

/// Layers defaults, the config file and flags, then validates the result.
pub fn resolve_settings(cli: &CliConfig) -> Result<Settings> {
    let mut settings = Settings::default();
    if let Some(path) = &cli.config {
        tracing::debug!("Loading config file: {}", path.display());
        settings.apply_file(&TomlConfig::from_file(path)?);
    }
    cli.apply_to(&mut settings)?;
    settings.validate()?;
    tracing::debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

pub fn require_credential(settings: &Settings) -> Result<Credential> {
    settings
        .credential
        .clone()
        .ok_or_else(|| AppError::MissingConfigError {
            field: "api_key".to_string(),
        })
}

/// Collects keywords from arguments and the keywords file. Piped input counts
/// as a keyword source when nothing else was given.
pub fn gather_keywords<R: Read>(
    cli: &CliConfig,
    stdin: R,
    stdin_is_terminal: bool,
) -> Result<Vec<Keyword>> {
    let keywords_file = cli
        .keywords_file
        .clone()
        .or_else(|| (cli.keywords.is_empty() && !stdin_is_terminal).then(|| PathBuf::from("-")));

    let keywords = read_keyword_sources(&cli.keywords, keywords_file.as_deref(), stdin)?;
    if keywords.is_empty() {
        tracing::warn!("{}", NO_KEYWORDS_MESSAGE);
        return Err(AppError::ValidationError {
            message: NO_KEYWORDS_MESSAGE.to_string(),
        });
    }
    Ok(keywords)
}

/// Runs every check that must pass before the first request goes out.
pub fn prepare<R: Read>(cli: &CliConfig, stdin: R, stdin_is_terminal: bool) -> Result<Job> {
    let settings = resolve_settings(cli)?;
    let credential = require_credential(&settings)?;
    let keywords = gather_keywords(cli, stdin, stdin_is_terminal)?;
    Ok(Job {
        settings,
        credential,
        keywords,
    })
}

/// Generates variations for the job and writes the report to the configured
/// file, or to `out` when none is set.
pub async fn execute<G, N, W>(
    job: &Job,
    generator: VariationGenerator<G, N>,
    out: &mut W,
) -> Result<Vec<KeywordReport>>
where
    G: TextGenerator,
    N: ErrorChannel,
    W: Write,
{
    let engine = VariationEngine::new(generator);
    let reports = engine.run(&job.credential, &job.keywords).await;
    let settings = &job.settings;

    match &settings.output_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            report::render(settings.format, &settings.model, &reports, &mut writer)?;
            writer.flush()?;
            tracing::info!("📁 Report saved to: {}", path.display());
        }
        None => {
            report::render(settings.format, &settings.model, &reports, out)?;
            out.flush()?;
        }
    }

    Ok(reports)
}

/// The whole command: checks, Gemini calls, report.
pub async fn run<R, W>(
    cli: &CliConfig,
    stdin: R,
    stdin_is_terminal: bool,
    out: &mut W,
) -> Result<Vec<KeywordReport>>
where
    R: Read,
    W: Write,
{
    let job = prepare(cli, stdin, stdin_is_terminal)?;
    let client = GeminiClient::new(&job.settings)?;
    execute(&job, VariationGenerator::new(client, StderrBanner), out).await
}
