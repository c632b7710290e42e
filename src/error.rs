pub type MapfolioResult<T> = Result<T, MapfolioError>;

#[derive(thiserror::Error, Debug)]
pub enum MapfolioError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("classification error: {0}")]
    Classify(String),

    #[error("data error: {0}")]
    Data(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MapfolioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn classify(msg: impl Into<String>) -> Self {
        Self::Classify(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            MapfolioError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            MapfolioError::classify("x")
                .to_string()
                .contains("classification error:")
        );
        assert!(MapfolioError::data("x").to_string().contains("data error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = MapfolioError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
