mod error_kind;

pub use error_kind::ErrorKind;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use anyhow::anyhow;
use serde_json::json;
use std::fmt::{Debug, Display, Formatter};

/// Taskminder application specific error type.
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
}

impl Error {
    /// Creates a Client error instance with the given root cause.
    pub fn client_with_root_cause(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::ClientError,
        }
    }

    /// Creates a Client error instance with the given message.
    pub fn client<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::client_with_root_cause(anyhow!(message))
    }

    /// Creates a NotFound error instance with the given message.
    pub fn not_found<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::NotFound,
        }
    }

    /// Creates a Storage error instance with the given root cause.
    pub fn storage(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::StorageError,
        }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::StorageError | ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self.kind {
            ErrorKind::ClientError | ErrorKind::NotFound => self.root_cause.to_string(),
            ErrorKind::StorageError => "Task storage is not available.".to_string(),
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR
                .canonical_reason()
                .unwrap_or("Unknown error.")
                .to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.root_cause, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Self {
            root_cause,
            kind: ErrorKind::Unknown,
        })
    }
}
