use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Transport call (send, answer callback) failed.
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_error_display() {
        let err = DbotError::Bot("network down".to_string());
        assert_eq!(err.to_string(), "Bot error: network down");
    }
}
