use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional TOML settings file. Every field is optional; command-line flags
/// take precedence over anything set here.
///
/// ```toml
/// [api]
/// base_url = "http://localhost:5000"
///
/// [output]
/// show_questions = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub show_questions: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.api.as_ref()?.base_url.as_deref()
    }

    pub fn show_questions(&self) -> Option<bool> {
        self.output.as_ref()?.show_questions
    }
}
