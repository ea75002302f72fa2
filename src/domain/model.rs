use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diet-related health status tags accepted by the backend.
///
/// The vocabulary is closed; anything outside it is rejected at parse time.
/// Selecting `None` alongside another tag is not prevented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietStatus {
    None,
    Puppy,
    Elderly,
    Pregnant,
    Allergy,
    OtherHealth,
}

impl DietStatus {
    pub const ALL: [DietStatus; 6] = [
        DietStatus::None,
        DietStatus::Puppy,
        DietStatus::Elderly,
        DietStatus::Pregnant,
        DietStatus::Allergy,
        DietStatus::OtherHealth,
    ];

    /// Wire name used in the request body and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            DietStatus::None => "none",
            DietStatus::Puppy => "puppy",
            DietStatus::Elderly => "elderly",
            DietStatus::Pregnant => "pregnant",
            DietStatus::Allergy => "allergy",
            DietStatus::OtherHealth => "other_health",
        }
    }
}

impl fmt::Display for DietStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(DietStatus::None),
            "puppy" => Ok(DietStatus::Puppy),
            "elderly" => Ok(DietStatus::Elderly),
            "pregnant" => Ok(DietStatus::Pregnant),
            "allergy" => Ok(DietStatus::Allergy),
            "other_health" => Ok(DietStatus::OtherHealth),
            other => Err(format!(
                "unknown diet status '{}' (expected one of: none, puppy, elderly, pregnant, allergy, other_health)",
                other
            )),
        }
    }
}

/// Scalar fields of the draft that `set_field` can overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    BreedName,
    AgeYears,
}

/// The in-memory, not-yet-submitted questionnaire state.
///
/// `age_years` is kept as the raw entered text until submission; range
/// checking happens in validation, not on assignment. `diet_statuses` keeps
/// insertion order and never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub breed_name: String,
    pub age_years: String,
    pub diet_statuses: Vec<DietStatus>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.breed_name.is_empty() && self.age_years.is_empty() && self.diet_statuses.is_empty()
    }
}

/// Request body for `POST /api/submit-dog-info`, in the backend's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(rename = "breed_name_AKC")]
    pub breed_name: String,
    #[serde(rename = "age_years_preReg")]
    pub age_years: String,
    #[serde(rename = "status_dietRelat_preReg")]
    pub diet_statuses: Vec<DietStatus>,
}

impl From<&Draft> for SubmissionPayload {
    fn from(draft: &Draft) -> Self {
        Self {
            breed_name: draft.breed_name.clone(),
            age_years: draft.age_years.clone(),
            diet_statuses: draft.diet_statuses.clone(),
        }
    }
}

/// Body of a 2xx submission response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerAck {
    pub message: String,
}

/// Body of a non-2xx submission response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerRejection {
    pub detail: String,
}

/// Body of `GET /api/questions/preset`.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetQuestions {
    pub success: bool,
    pub questions: Vec<String>,
}

/// Resolution of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Backend accepted the submission; the draft should be reset.
    Accepted { message: String },
    /// Backend rejected the submission; the draft is kept for correction.
    Rejected { detail: String },
    /// No response arrived at all.
    Unreachable,
    /// A previous submission is still outstanding; no request was sent.
    AlreadyInFlight,
}
