use crate::domain::model::Draft;
use crate::utils::error::{IntakeError, Result};
use url::Url;

/// Age range the questionnaire accepts, in years.
pub const AGE_YEARS_MIN: f64 = 0.0;
pub const AGE_YEARS_MAX: f64 = 30.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IntakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IntakeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IntakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IntakeError::InvalidFieldError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(IntakeError::InvalidFieldError {
            field: field_name.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// The browser form delegates these checks to native input widgets; outside
/// a browser they have to be restated before submission.
impl Validate for Draft {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("breed_name", &self.breed_name)?;

        let age: f64 =
            self.age_years
                .trim()
                .parse()
                .map_err(|_| IntakeError::InvalidFieldError {
                    field: "age_years".to_string(),
                    reason: format!("'{}' is not a number", self.age_years),
                })?;
        validate_range("age_years", age, AGE_YEARS_MIN, AGE_YEARS_MAX)?;

        Ok(())
    }
}
