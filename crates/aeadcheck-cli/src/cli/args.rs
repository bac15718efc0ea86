use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aeadcheck",
    version,
    about = "Fixture-driven conformance checking for AEAD decrypt-and-verify providers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the vector suite against a provider
    Run(RunArgs),
    /// List vectors and whether the current feature set selects them
    List(ListArgs),
    /// Validate config and vector files without running anything
    Validate(ValidateArgs),
    Version,
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    /// Run config (YAML); defaults to aeadcheck.yaml when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// External vector file (YAML/JSON); overrides the config's `vectors`
    #[arg(long)]
    pub vectors: Option<PathBuf>,

    /// AEAD provider under test
    #[arg(long, default_value = "rustcrypto")]
    pub provider: String,

    /// Per-provider-call timeout; overrides the config's setting
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Write full per-vector results as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write machine-readable summary.json
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Strict mode: any non-pass outcome, including skips, fails the run
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Clone)]
pub struct ListArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub vectors: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct ValidateArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub vectors: Option<PathBuf>,
}
