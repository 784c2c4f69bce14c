use anyhow::Result;
use clap::Parser;
use httpmock::prelude::*;
use keyword_variations::app::driver;
use keyword_variations::CliConfig;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

// Kept alone in its own binary because it sets GEMINI_API_KEY.
#[tokio::test]
async fn test_flag_then_environment_then_config_file() -> Result<()> {
    let server = MockServer::start_async().await;
    let reply = json!({"candidates": [{"content": {"role": "model", "parts": [{"text": "1. one"}]}}]});
    let env_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .header("x-goog-api-key", "env-key");
            then.status(200).json_body(reply.clone());
        })
        .await;
    let flag_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .header("x-goog-api-key", "flag-key");
            then.status(200).json_body(reply.clone());
        })
        .await;

    let mut config = NamedTempFile::new()?;
    writeln!(
        config,
        "[gemini]\napi_key = \"file-key\"\nendpoint = \"{}\"\ntimeout_seconds = 5",
        server.url("/v1beta")
    )?;
    let path = config.path().to_str().unwrap();

    std::env::set_var("GEMINI_API_KEY", "env-key");

    let env_cli = CliConfig::try_parse_from(["keyword-variations", "-c", path, "seo"])?;
    driver::run(&env_cli, std::io::empty(), true, &mut std::io::sink()).await?;

    let flag_cli =
        CliConfig::try_parse_from(["keyword-variations", "-c", path, "--api-key", "flag-key", "seo"])?;
    driver::run(&flag_cli, std::io::empty(), true, &mut std::io::sink()).await?;

    std::env::remove_var("GEMINI_API_KEY");

    env_mock.assert_hits_async(1).await;
    flag_mock.assert_hits_async(1).await;
    Ok(())
}
