use async_trait::async_trait;
use crate::core::library::CirculationError;

#[derive(Debug)]
pub enum CommandError {
    Access {
        message: String,
        reason_code: Option<String>,
    },
    Conflict {
        message: String,
    },
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CirculationError> for CommandError {
    fn from(other: CirculationError) -> Self {
        match other {
            CirculationError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            CirculationError::NotGranted { message, reason_code } => {
                CommandError::Access { message, reason_code }
            }
            CirculationError::Conflict { message } => {
                CommandError::Conflict { message }
            }
            CirculationError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CirculationError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CirculationError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CirculationError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: true }
            }
        }
    }
}
