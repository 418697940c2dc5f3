//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the engine and its loaders.
///
/// Per-schedule infeasibility is not an error: it is recorded as an
/// [`UnservedSchedule`](crate::models::UnservedSchedule) in the plan.
#[derive(Debug, Error)]
pub enum FleetError {
    /// Inputs or parameters failed validation. All detected issues are listed.
    #[error("invalid configuration: {}", summarize(.0))]
    Configuration(Vec<ValidationError>),

    #[error("invalid clock time '{0}' (expected HH:MM)")]
    InvalidClock(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl FleetError {
    /// Validation issues, if this is a configuration error.
    pub fn issues(&self) -> &[ValidationError] {
        match self {
            Self::Configuration(issues) => issues,
            _ => &[],
        }
    }
}

fn summarize(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_configuration_message_lists_issues() {
        let err = FleetError::Configuration(vec![
            ValidationError::new(ValidationErrorKind::WeightSum, "weights sum to 0.99"),
            ValidationError::new(ValidationErrorKind::NonPositiveValue, "bad efficiency"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid configuration: weights sum to 0.99; bad efficiency"
        );
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_non_configuration_has_no_issues() {
        let err = FleetError::InvalidClock("7pm".into());
        assert!(err.issues().is_empty());
        assert_eq!(err.to_string(), "invalid clock time '7pm' (expected HH:MM)");
    }
}
