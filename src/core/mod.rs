pub mod client;
pub mod draft;
pub mod engine;

pub use crate::domain::model::{DietStatus, Draft, DraftField, SubmitOutcome};
pub use crate::domain::ports::{ChangeListener, ConfigProvider, Notifier};
pub use crate::utils::error::Result;
