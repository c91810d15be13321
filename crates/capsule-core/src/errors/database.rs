// ABOUTME: Database error types for storage operations with structured context
// ABOUTME: Wraps sqlx errors and distinguishes not-found from infrastructure failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

/// Common error types for database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The requested entity does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Entity that was not found (e.g., "garment", "style profile")
        entity: String,
    },

    /// An entity with the same identity already exists
    #[error("{entity} already exists")]
    AlreadyExists {
        /// Entity that already exists
        entity: String,
    },

    /// A stored value could not be decoded into its domain type
    #[error("Corrupt {entity} row: {reason}")]
    CorruptRow {
        /// Entity whose row failed to decode
        entity: &'static str,
        /// Reason the row failed to decode
        reason: String,
    },

    /// Schema migration failed
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying driver error
    #[error("Database query failed")]
    Query {
        /// Underlying sqlx error
        #[from]
        source: sqlx::Error,
    },
}

impl DatabaseError {
    /// Not-found error for the given entity
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    /// True when this error means the entity simply does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Query {
                    source: sqlx::Error::RowNotFound,
                }
        )
    }
}

/// Result type for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
