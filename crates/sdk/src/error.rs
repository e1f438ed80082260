//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Server-side failure kinds, decoded from the JSON-RPC error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    DivisionByZero,
    NotFound,
    Unimplemented,
    Cancelled,
    Unknown,
    Unavailable,
    DeadlineExceeded,
}

impl RemoteErrorKind {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            4000 => Some(Self::DivisionByZero),
            4004 => Some(Self::NotFound),
            4010 => Some(Self::Unimplemented),
            4099 => Some(Self::Cancelled),
            5000 => Some(Self::Unknown),
            5003 => Some(Self::Unavailable),
            5004 => Some(Self::DeadlineExceeded),
            _ => None,
        }
    }
}

impl SdkError {
    /// The server's error kind, if this is an application error
    pub fn remote_kind(&self) -> Option<RemoteErrorKind> {
        match self {
            SdkError::Rpc { code, .. } => RemoteErrorKind::from_code(*code),
            _ => None,
        }
    }

    /// Whether repeating the same call may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SdkError::Transport(_) | SdkError::Timeout | SdkError::Connection(_)
        ) || self.remote_kind() == Some(RemoteErrorKind::Unavailable)
    }
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => SdkError::Rpc {
                code: call_err.code(),
                message: call_err.message().to_string(),
            },
            jsonrpsee::core::ClientError::Transport(e) => {
                SdkError::Transport(format!("Transport error: {}", e))
            }
            jsonrpsee::core::ClientError::RequestTimeout => SdkError::Timeout,
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => SdkError::Serialization(e),
            _ => SdkError::Other(e.to_string()),
        }
    }
}
