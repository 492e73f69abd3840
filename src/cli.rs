//! Command-line interface definitions using clap

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::data::ResumeDocument;
use crate::export::{Exporter, PdfExporter};
use crate::preview::render_preview;
use crate::Config;

/// ResumeForge - build a resume step by step in the terminal
#[derive(Parser, Debug)]
#[command(name = "resumeforge")]
#[command(version)]
#[command(about = "Build a resume step by step with a live preview and PDF export", long_about = None)]
pub struct Cli {
    /// Override the data directory (default: ~/.resumeforge)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory that receives resume.pdf
    #[arg(long, short = 'o', global = true)]
    pub output_dir: Option<PathBuf>,

    /// Start from a JSON resume snapshot
    #[arg(long, short = 'i', global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands; without one the wizard starts
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resume preview and exit
    Preview {
        /// Print the document snapshot as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Write resume.pdf and exit
    Export,
}

/// Read a JSON document snapshot
pub fn load_snapshot(path: &Path) -> anyhow::Result<ResumeDocument> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse resume snapshot {}", path.display()))
}

/// Text printed by the `preview` subcommand
pub fn preview_output(document: &ResumeDocument, json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(document)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(render_preview(document).to_plain_text())
}

/// Run the `export` subcommand, returning the written path
pub fn export_document(document: &ResumeDocument, config: &Config) -> anyhow::Result<PathBuf> {
    let exporter = PdfExporter::new(config.page);
    let path = exporter.export(&render_preview(document), &config.output_dir)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["resumeforge", "preview", "--json", "-o", "/tmp/out"]);
        assert!(matches!(cli.command, Some(Commands::Preview { json: true })));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_no_subcommand_starts_wizard() {
        let cli = Cli::parse_from(["resumeforge"]);
        assert!(cli.command.is_none());
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_preview_output_of_blank_document() {
        let text = preview_output(&ResumeDocument::default(), false).unwrap();
        assert!(text.starts_with("Your Name\n"));
        let json = preview_output(&ResumeDocument::default(), true).unwrap();
        assert!(json.contains("\"experienceEntries\""));
    }
}
