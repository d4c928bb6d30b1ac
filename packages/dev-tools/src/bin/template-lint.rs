//! Template lint and normalisation tool
//!
//! Reads template documents (JSON, as persisted by the editor), fills in
//! schema defaults for anything missing, validates them and prints an outline
//! of each component tree.
//!
//! # Usage
//!
//! ```bash
//! # Check one or more files
//! cargo run --bin template-lint -- templates/home.json templates/pricing.json
//!
//! # Rewrite files in normalised form
//! cargo run --bin template-lint -- --write templates/*.json
//! ```
//!
//! `SITEDESK_MAX_DEPTH` (and the other `SITEDESK_*` variables) apply as they
//! do in the editor. Exit status is non-zero if any file fails.

use anyhow::Context;
use sitedesk_core::{ComponentNode, EditorConfig, TemplateDocument};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut write = false;
    let mut files = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--write" | "-w" => write = true,
            "--help" | "-h" => {
                println!("Usage: template-lint [--write] <template.json>...");
                return Ok(());
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if files.is_empty() {
        anyhow::bail!("No template files given. Usage: template-lint [--write] <template.json>...");
    }

    let config = EditorConfig::from_env()?;
    let mut failures = 0;

    for path in &files {
        match lint_file(path, &config, write).await {
            Ok(document) => {
                println!(
                    "✅ {} - \"{}\" ({} components, depth {})",
                    path.display(),
                    document.name,
                    document.component_count(),
                    document.depth()
                );
                print_outline(&document.components, 1);
            }
            Err(e) => {
                failures += 1;
                eprintln!("❌ {}: {:#}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} templates failed", failures, files.len());
    }
    Ok(())
}

async fn lint_file(
    path: &Path,
    config: &EditorConfig,
    write: bool,
) -> anyhow::Result<TemplateDocument> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let document: TemplateDocument =
        serde_json::from_str(&contents).context("Failed to parse template")?;
    document
        .validate(config.max_depth)
        .context("Template is invalid")?;

    if write {
        let normalised = serde_json::to_string_pretty(&document)?;
        if normalised.trim_end() != contents.trim_end() {
            write_atomic(path, &normalised).await?;
            tracing::info!("Rewrote {}", path.display());
        }
    }

    Ok(document)
}

/// Write via a temp file in the same directory, then rename over the target
async fn write_atomic(path: &Path, contents: &str) -> anyhow::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, format!("{}\n", contents))
        .await
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    tokio::fs::rename(&temp_path, path)
        .await
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

fn print_outline(nodes: &[ComponentNode], level: usize) {
    for node in nodes {
        println!("{}- {} [{}] {}", "  ".repeat(level), node.name, node.kind(), node.id);
        print_outline(node.children(), level + 1);
    }
}
