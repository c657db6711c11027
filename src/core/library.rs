use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CirculationError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // The requester is not allowed to perform the operation, e.g. a patron
    // attempting to check out a hold placed by someone else.
    NotGranted {
        message: String,
        reason_code: Option<String>,
    },
    // The record changed or appeared concurrently, e.g. a stale version on
    // save or a second item registered under an existing barcode.
    Conflict {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CirculationError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> CirculationError {
        CirculationError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_granted(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::NotGranted { message: message.to_string(), reason_code }
    }

    pub fn conflict(message: &str) -> CirculationError {
        CirculationError::Conflict { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CirculationError {
        CirculationError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CirculationError {
        CirculationError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CirculationError::Database { retryable, .. } => { *retryable }
            CirculationError::NotGranted { .. } => { false }
            CirculationError::Conflict { .. } => { false }
            CirculationError::NotFound { .. } => { false }
            CirculationError::Validation { .. } => { false }
            CirculationError::Serialization { .. } => { false }
            CirculationError::Runtime { .. } => { false }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CirculationError::Database { message, .. } => { message }
            CirculationError::NotGranted { message, .. } => { message }
            CirculationError::Conflict { message } => { message }
            CirculationError::NotFound { message } => { message }
            CirculationError::Validation { message, .. } => { message }
            CirculationError::Serialization { message } => { message }
            CirculationError::Runtime { message, .. } => { message }
        }
    }
}

impl From<std::io::Error> for CirculationError {
    fn from(err: std::io::Error) -> Self {
        CirculationError::runtime(
            format!("serde io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for CirculationError {
    fn from(err: serde_json::Error) -> Self {
        CirculationError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CirculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CirculationError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CirculationError::NotGranted { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CirculationError::Conflict { message } => {
                write!(f, "{}", message)
            }
            CirculationError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CirculationError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the circulation core.
pub type CirculationResult<T> = Result<T, CirculationError>;

// Lifecycle of a lendable item. Transitions are strictly
// Available -> OnHold -> Issued; the return workflow is out of scope.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum ItemStatus {
    Available,
    OnHold,
    Issued,
    Unknown,
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => ItemStatus::Available,
            "OnHold" => ItemStatus::OnHold,
            "Issued" => ItemStatus::Issued,
            _ => ItemStatus::Unknown,
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "Available"),
            ItemStatus::OnHold => write!(f, "OnHold"),
            ItemStatus::Issued => write!(f, "Issued"),
            ItemStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

// Lifecycle of a hold record. A hold is never deleted by this core.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum HoldStatus {
    Placed,
    CheckedOut,
}

impl From<String> for HoldStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CheckedOut" => HoldStatus::CheckedOut,
            _ => HoldStatus::Placed,
        }
    }
}

impl Display for HoldStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            HoldStatus::Placed => write!(f, "Placed"),
            HoldStatus::CheckedOut => write!(f, "CheckedOut"),
        }
    }
}
