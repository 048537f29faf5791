pub type WavelineResult<T> = Result<T, WavelineError>;

#[derive(thiserror::Error, Debug)]
pub enum WavelineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("gradient error: {0}")]
    Gradient(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavelineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn gradient(msg: impl Into<String>) -> Self {
        Self::Gradient(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            WavelineError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            WavelineError::gradient("x")
                .to_string()
                .contains("gradient error:")
        );
        assert!(
            WavelineError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = WavelineError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
