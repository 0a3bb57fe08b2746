use thiserror::Error;

/// Contract violations reported by the statistics functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StatsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        StatsError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Reject an empty sample.
pub(crate) fn ensure_non_empty(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        Err(StatsError::invalid("sample must not be empty"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = StatsError::invalid("sample must not be empty");
        assert_eq!(err.to_string(), "Invalid argument: sample must not be empty");
    }

    #[test]
    fn test_ensure_non_empty() {
        assert!(ensure_non_empty(&[]).is_err());
        assert!(ensure_non_empty(&[1.0]).is_ok());
    }
}
