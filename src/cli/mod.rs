//! CLI argument parsing for maildraft.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maildraft: generate personalized coaching emails from a user roster.
///
/// Each roster row is classified into a persona (managerial status plus
/// tenure bucket), turned into a prompt, sent to an LLM completion service,
/// and the free-text reply is parsed into subject line, preview text,
/// headline, and body.
#[derive(Parser, Debug)]
#[command(name = "maildraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for maildraft.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate personalized emails for every row of a roster.
    ///
    /// Requires the completion-service credential (MAILDRAFT_API_KEY).
    /// Writes one output row per input row, in input order; rows whose
    /// generation fails carry the ERROR sentinel instead of aborting.
    Generate(GenerateArgs),

    /// Preview the roster without calling the completion service.
    ///
    /// Prints per-row department, role, tenure, and persona. Works
    /// without a credential.
    Preview(PreviewArgs),

    /// Print the composed prompts without calling the completion service.
    ///
    /// Shows the system/user instruction pair that `generate` would send
    /// for each row. Works without a credential.
    Prompt(PromptArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the roster CSV.
    pub roster: PathBuf,

    /// Email topic (e.g. "career growth", "burnout", "giving feedback").
    #[arg(short, long)]
    pub topic: String,

    /// Path to write the generated emails CSV.
    #[arg(short, long, default_value = "generated_emails.csv")]
    pub output: PathBuf,

    /// Path to a YAML config file (defaults are used when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reference date for tenure calculation (YYYY-MM-DD).
    ///
    /// Overrides the config value; defaults to today when neither is set.
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Path to the roster CSV.
    pub roster: PathBuf,

    /// Path to a YAML config file (defaults are used when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reference date for tenure calculation (YYYY-MM-DD).
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
}

/// Arguments for the `prompt` command.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Path to the roster CSV.
    pub roster: PathBuf,

    /// Email topic (e.g. "career growth", "burnout", "giving feedback").
    #[arg(short, long)]
    pub topic: String,

    /// Only print the prompt for this row (1-based).
    #[arg(long)]
    pub row: Option<usize>,

    /// Path to a YAML config file (defaults are used when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reference date for tenure calculation (YYYY-MM-DD).
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
