use anyhow::{anyhow, Result};
use gemini_client::GeminiClient;
use sprinova_core::analytics;
use sprinova_core::config::Config;
use sprinova_core::flows::{AnalyticsSummaryInput, ContentKind, DraftInput};
use std::path::{Path, PathBuf};

fn client_for(root: &Path) -> Result<GeminiClient> {
    let config = Config::load_or_default(root).map_err(|e| anyhow!("{e}"))?;
    if !config.ai.enabled {
        return Err(anyhow!("AI tools are disabled in sprinova.yaml"));
    }
    let client = GeminiClient::from_env_required()
        .map_err(|e| anyhow!("{e}"))?
        .with_model(config.ai.model);
    Ok(client)
}

pub fn run_draft(
    root: &Path,
    industry: String,
    target_audience: String,
    desired_message: String,
    content_type: &str,
    json: bool,
) -> Result<()> {
    let content_type: ContentKind = content_type.parse().map_err(|e| anyhow!("{e}"))?;
    let input = DraftInput {
        industry,
        target_audience,
        desired_message,
        content_type,
    };
    input.validate().map_err(|e| anyhow!("{e}"))?;

    let client = client_for(root)?;
    let rt = tokio::runtime::Runtime::new()?;
    let draft = rt.block_on(client.generate(&input.prompt()))?;

    if json {
        crate::output::print_json(&serde_json::json!({ "draft_content": draft }))?;
    } else {
        println!("{draft}");
    }
    Ok(())
}

pub fn run_summarize(
    root: &Path,
    file: Option<PathBuf>,
    industry: String,
    target_audience: String,
    json: bool,
) -> Result<()> {
    let analytics_data = match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("cannot read {}: {e}", path.display()))?,
        None => serde_json::to_string_pretty(&analytics::sample_report())?,
    };
    let input = AnalyticsSummaryInput {
        analytics_data,
        industry,
        target_audience,
    };
    input.validate().map_err(|e| anyhow!("{e}"))?;

    let client = client_for(root)?;
    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(client.generate(&input.prompt()))?;

    if json {
        crate::output::print_json(&serde_json::json!({ "summary": summary }))?;
    } else {
        println!("{summary}");
    }
    Ok(())
}
