pub mod cli;
pub mod toml_config;

use crate::domain::model::DietStatus;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::FileConfig;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Raw command-line flags, one per questionnaire field plus client settings.
#[derive(Debug, Clone, Parser)]
#[command(name = "whisker-intake")]
#[command(about = "Submit a dog diet questionnaire to the WhiskerWorthy backend")]
pub struct CliConfig {
    /// Official AKC breed name, e.g. "Labrador Retriever"
    #[arg(long)]
    pub breed: String,

    /// Dog's age in years, one decimal allowed (0-30), e.g. 3.5
    #[arg(long)]
    pub age: String,

    /// Diet-related health statuses, comma separated
    /// (none, puppy, elderly, pregnant, allergy, other_health)
    #[arg(long = "status", value_delimiter = ',')]
    pub statuses: Vec<DietStatus>,

    /// Backend origin; overrides the config file
    #[arg(long)]
    pub api_base: Option<String>,

    /// Path to an optional TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the suggested vet questions after a successful submission
    #[arg(long)]
    pub show_questions: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings after merging CLI flags over the optional config file.
/// Flag > file > default.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub api_base: String,
    pub show_questions: bool,
}

impl IntakeConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let api_base = cli
            .api_base
            .clone()
            .or_else(|| file.base_url().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let show_questions = cli.show_questions || file.show_questions().unwrap_or(false);

        Ok(Self {
            api_base,
            show_questions,
        })
    }
}

impl ConfigProvider for IntakeConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Validate for IntakeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)
    }
}
