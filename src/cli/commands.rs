use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "phishguard", version, about = "Two-stage phishing detection engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one URL and print the verdict as JSON
    Evaluate(EvaluateArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct EvaluateArgs {
    /// URL to evaluate (scheme defaults to https)
    pub url: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Local LLM endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// LLM model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Deadline for the LLM scoring call in milliseconds
    #[arg(long)]
    pub llm_timeout_ms: Option<u64>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port
    #[arg(short, long, default_value_t = 8001)]
    pub port: u16,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: String,
}
