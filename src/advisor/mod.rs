//! Optional LLM critique of a build.
//!
//! The deterministic report is always produced first. The model only sees
//! that report and the build, and its answer is printed next to it; nothing
//! it says changes a score.

mod client;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Catalog, LoadError, MemoryCatalog};
use crate::component::Build;
use crate::report_helpers;
use crate::system::{self, SystemReport};
use client::{ApiRequest, Message};

const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
const MAX_TOKENS: u32 = 2048;

const SYSTEM_PROMPT: &str = "\
You review PC builds. You receive a build (the selected components and their \
spec sheets) together with a deterministic scoring report for it.

Do not rescore the parts. Explain the report in plain language and suggest \
concrete changes, naming specific components where useful.

Reply with a single JSON object and nothing else:
{\"summary\": string, \"strengths\": [string], \"weaknesses\": [string], \
\"suggestions\": [string]}";

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("static regex")
});

#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("unsupported provider: {0}. Supported: claude")]
    UnsupportedProvider(String),
    #[error(
        "ANTHROPIC_API_KEY environment variable not set. \
         Get your key at https://console.anthropic.com/"
    )]
    MissingApiKey,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("model reply is not the expected JSON object: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("cannot encode build: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// The critique returned by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Advice {
    /// Plain-text rendering, used for the terminal and for `--output`.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.summary);
        for (title, items) in [
            ("Strengths", &self.strengths),
            ("Weaknesses", &self.weaknesses),
            ("Suggestions", &self.suggestions),
        ] {
            if items.is_empty() {
                continue;
            }
            out.push_str(&format!("\n{title}\n"));
            for item in items {
                out.push_str(&format!(" - {item}\n"));
            }
        }
        out
    }
}

/// Extract the advice object from a model reply. Accepts a fenced code block
/// or a bare object, with or without surrounding prose.
pub fn parse_advice(reply: &str) -> Result<Advice, AdviceError> {
    let candidate = match FENCED_JSON.captures(reply) {
        Some(caps) => caps.get(1).map(|m| m.as_str()),
        None => match (reply.find('{'), reply.rfind('}')) {
            (Some(start), Some(end)) if start < end => Some(&reply[start..=end]),
            _ => None,
        },
    };
    let Some(json) = candidate else {
        return Err(AdviceError::MalformedResponse(
            "no JSON object in reply".to_string(),
        ));
    };
    serde_json::from_str(json).map_err(|e| AdviceError::MalformedResponse(e.to_string()))
}

#[derive(Serialize)]
struct PromptPayload<'a> {
    build: &'a Build,
    report: &'a SystemReport,
}

/// User message: the build and its report as one JSON document.
fn build_prompt(build: &Build, report: &SystemReport) -> Result<String, AdviceError> {
    let payload = serde_json::to_string_pretty(&PromptPayload { build, report })?;
    Ok(format!("Review this build:\n\n{payload}"))
}

fn request_advice(
    api_key: &str,
    model: &str,
    build: &Build,
    report: &SystemReport,
) -> Result<Advice, AdviceError> {
    let request = ApiRequest {
        model: model.to_string(),
        max_tokens: MAX_TOKENS,
        system: SYSTEM_PROMPT.to_string(),
        messages: vec![Message {
            role: "user".to_string(),
            content: build_prompt(build, report)?,
        }],
    };

    tracing::info!(model, "requesting build review");
    let response = client::send_message(api_key, &request)?;
    parse_advice(&response.text())
}

pub fn run(
    provider: &str,
    build_path: &Path,
    catalog_path: Option<&Path>,
    model: Option<&str>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if provider != "claude" {
        return Err(AdviceError::UnsupportedProvider(provider.to_string()).into());
    }
    let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| AdviceError::MissingApiKey)?;

    let catalog = catalog_path.map(MemoryCatalog::load).transpose()?;
    let build = catalog::load_build(build_path, catalog.as_ref().map(|c| c as &dyn Catalog))?;
    let report = system::aggregate_system(&build);
    system::print_report(&report, build_path.to_str());

    let model = model.unwrap_or(DEFAULT_MODEL);
    eprintln!("Calling Claude API...");
    let advice = request_advice(&api_key, model, &build, &report)?;

    let separator = report_helpers::separator(66);
    println!();
    println!(" Review");
    println!("{separator}");
    let text = advice.render();
    print!("{text}");
    println!("{separator}");

    if let Some(out_path) = output {
        fs::write(out_path, &text).map_err(|source| AdviceError::Write {
            path: out_path.display().to_string(),
            source,
        })?;
        eprintln!("Review saved to {}", out_path.display());
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
