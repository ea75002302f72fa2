pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::ConsoleNotifier, CliConfig, IntakeConfig};
pub use core::{client::SubmissionClient, draft::FormController, engine::IntakeEngine};
pub use domain::model::{DietStatus, Draft, DraftField, SubmissionPayload, SubmitOutcome};
pub use utils::error::{IntakeError, Result};
