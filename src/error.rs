//! Error types for the SignRequest client.
//!
//! Errors fall into three families: local misuse that never reaches the
//! network, remote failures reported by the transport, and remote failures
//! raised while submitting documents or sign requests.

use thiserror::Error;

/// Result type for SignRequest operations.
pub type Result<T> = std::result::Result<T, SignRequestError>;

/// Errors that can occur when using the SignRequest client.
#[derive(Error, Debug)]
pub enum SignRequestError {
    /// A client-side precondition was violated. No request was sent.
    #[error("{message}")]
    Local {
        /// Human-readable error message.
        message: String,
    },

    /// The transport or the remote API failed.
    #[error("{message}")]
    Remote {
        /// Human-readable error message.
        message: String,
        /// HTTP status code, when the failure carried one.
        code: Option<u16>,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A remote failure while creating a document, adding an attachment or
    /// sending a sign request.
    #[error("{message}")]
    SendSignRequest {
        /// Human-readable error message, copied from the remote error.
        message: String,
        /// HTTP status code, copied from the remote error.
        code: Option<u16>,
        /// The remote error this was raised from.
        #[source]
        source: Option<Box<SignRequestError>>,
    },

    /// A success response did not contain the expected JSON.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Reading a local file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SignRequestError {
    pub(crate) fn local(message: impl Into<String>) -> Self {
        SignRequestError::Local {
            message: message.into(),
        }
    }

    /// Re-raise a remote error as a [`SignRequestError::SendSignRequest`].
    ///
    /// Message and code are kept and the original error becomes the cause.
    /// Errors of any other kind pass through unchanged.
    pub(crate) fn into_send_sign_request(self) -> Self {
        if !self.is_remote() {
            return self;
        }
        SignRequestError::SendSignRequest {
            message: self.to_string(),
            code: self.status_code(),
            source: Some(Box::new(self)),
        }
    }

    /// Re-raise a remote error with a contextual prefix. Other kinds pass through.
    pub(crate) fn with_context(self, context: impl std::fmt::Display) -> Self {
        if !self.is_remote() {
            return self;
        }
        SignRequestError::Remote {
            message: format!("{}: {}", context, self),
            code: self.status_code(),
            source: Some(Box::new(self)),
        }
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SignRequestError::Remote { code, .. }
            | SignRequestError::SendSignRequest { code, .. } => *code,
            _ => None,
        }
    }

    /// Returns true if the error was raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, SignRequestError::Local { .. })
    }

    /// Returns true for a plain remote error.
    pub fn is_remote(&self) -> bool {
        matches!(self, SignRequestError::Remote { .. })
    }

    /// Returns true for a remote error raised from the document and sign request submission calls.
    pub fn is_send_sign_request(&self) -> bool {
        matches!(self, SignRequestError::SendSignRequest { .. })
    }
}
