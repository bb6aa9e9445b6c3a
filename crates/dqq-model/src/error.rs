use thiserror::Error;

#[derive(Debug, Error)]
pub enum DqqError {
    #[error("unknown question key: {0}")]
    UnknownQuestion(String),
    #[error("invalid gender code: {0} (expected 0 for male or 1 for female)")]
    InvalidGender(i64),
}

pub type Result<T> = std::result::Result<T, DqqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            DqqError::UnknownQuestion("AGE".to_string()).to_string(),
            "unknown question key: AGE"
        );
        assert_eq!(
            DqqError::InvalidGender(3).to_string(),
            "invalid gender code: 3 (expected 0 for male or 1 for female)"
        );
    }
}
