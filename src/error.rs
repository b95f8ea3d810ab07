use thiserror::Error;

pub type Result<T> = std::result::Result<T, BanditError>;

#[derive(Error, Debug)]
pub enum BanditError {
    /// A strategy, reward source or experiment was configured with an
    /// unusable value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A strategy selected an arm the problem instance does not have.
    #[error("arm {arm} out of range, instance has {num_arms} arms")]
    ArmOutOfRange { arm: usize, num_arms: usize },

    #[error("strategy is configured for {strategy} arms, instance has {instance}")]
    ArmCountMismatch { strategy: usize, instance: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BanditError {
    pub(crate) fn invalid(message: impl Into<String>) -> BanditError {
        BanditError::InvalidParameter {
            message: message.into(),
        }
    }
}
