use emp_core::{CoreError, ErrorLocation};
use emp_db::DbError;

use std::panic::Location;

use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Failures of the employee service, one variant per kind a caller may branch on.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The requested id is absent from storage
    #[error("{message} {location}")]
    NotFound {
        id: i64,
        message: String,
        location: ErrorLocation,
    },

    /// A storage read failed for a reason other than absence
    #[error("{message} {location}")]
    Retrieval {
        message: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    /// The external source was unreachable or returned an unusable payload
    #[error("{message} {location}")]
    SourceFetch {
        message: String,
        #[source]
        source: Option<BoxedCause>,
        location: ErrorLocation,
    },

    /// The bulk upsert failed after a successful fetch
    #[error("{message} {location}")]
    Persistence {
        message: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Computation {
        id: i64,
        message: String,
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        ServiceError::NotFound {
            id,
            message: format!("Employee with ID {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn retrieval<S: Into<String>>(message: S, source: DbError) -> Self {
        let message = format!("{}: {}", message.into(), source.reason());
        ServiceError::Retrieval {
            message,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn source_fetch<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxedCause>,
    {
        let source = source.into();
        ServiceError::SourceFetch {
            message: format!("{}: {}", message.into(), source),
            source: Some(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The source answered, but without an envelope or without `data`.
    #[track_caller]
    pub fn no_source_data() -> Self {
        ServiceError::SourceFetch {
            message: "No employees data received from API".to_string(),
            source: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persistence<S: Into<String>>(message: S, source: DbError) -> Self {
        let message = format!("{}: {}", message.into(), source.reason());
        ServiceError::Persistence {
            message,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn computation(id: i64, source: CoreError) -> Self {
        ServiceError::Computation {
            id,
            message: format!(
                "Failed to compute annual salary for employee with ID {}: {}",
                id,
                source.reason()
            ),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable message without the capture location.
    pub fn reason(&self) -> &str {
        match self {
            ServiceError::NotFound { message, .. }
            | ServiceError::Retrieval { message, .. }
            | ServiceError::SourceFetch { message, .. }
            | ServiceError::Persistence { message, .. }
            | ServiceError::Computation { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
