use std::fmt;
use std::sync::Arc;

use thiserror::Error;

// Shareable wrapper around the failure that produced a classified error.
// The same cause may back more than one session field, so it is reference counted.
#[derive(Clone)]
pub struct Cause(Arc<dyn std::error::Error + Send + Sync>);

impl Cause {
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Cause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

// Causes compare by message; the underlying error types are opaque.
impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// Failure reported by the identity client.
///
/// The client offers no typed errors, only a free-text message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClientFailure {
    pub message: String,
}

impl ClientFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Failure decoding an encoded token into its claim set.
#[derive(Debug, Error)]
pub enum TokenDecodeError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a JSON object: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("token payload has no string claim `{0}`")]
    MissingClaim(String),
}

/// Classified error carried by every failed session outcome.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    #[error("You are currently signed out.")]
    SignedOut,
    #[error("You are currently signed out; guest access may be possible.")]
    SignedOutGuestPossible,
    #[error("Your session has expired.")]
    SessionExpired,
    #[error("Your account type does not support this operation.")]
    InvalidAccountType {
        #[source]
        cause: Option<Cause>,
    },
    #[error("An unclassified error prevented this operation: {0}")]
    Unknown(#[source] Cause),
    #[error("{message}")]
    Other {
        message: String,
        recovery_suggestion: String,
        #[source]
        cause: Option<Cause>,
    },
}

impl SessionError {
    pub fn unknown<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SessionError::Unknown(Cause::new(error))
    }

    pub fn other(message: impl Into<String>, recovery_suggestion: impl Into<String>) -> Self {
        SessionError::Other {
            message: message.into(),
            recovery_suggestion: recovery_suggestion.into(),
            cause: None,
        }
    }

    pub fn with_cause<E>(self, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            SessionError::InvalidAccountType { .. } => SessionError::InvalidAccountType {
                cause: Some(Cause::new(error)),
            },
            SessionError::Other {
                message,
                recovery_suggestion,
                ..
            } => SessionError::Other {
                message,
                recovery_suggestion,
                cause: Some(Cause::new(error)),
            },
            other => other,
        }
    }

    // Stable machine-readable name used in JSON responses and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::SignedOut => "signed_out",
            SessionError::SignedOutGuestPossible => "signed_out_guest_possible",
            SessionError::SessionExpired => "session_expired",
            SessionError::InvalidAccountType { .. } => "invalid_account_type",
            SessionError::Unknown(_) => "unknown",
            SessionError::Other { .. } => "other",
        }
    }

    pub fn recovery_suggestion(&self) -> Option<&str> {
        match self {
            SessionError::Other {
                recovery_suggestion,
                ..
            } => Some(recovery_suggestion),
            _ => None,
        }
    }
}
