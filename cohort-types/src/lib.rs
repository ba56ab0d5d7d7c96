//! Core type definitions for the Cohort enrollment service.
//!
//! This crate defines the fundamental types shared by the store, the stats
//! aggregator, and the HTTP API:
//! - Enrollment identifiers (UUID v7)
//! - The enrollment kind, plan tier, and payment status enums
//!
//! Everything that carries behavior (records, stats, validation) lives in
//! `cohort-model` and above, not here.

mod enums;
mod ids;

pub use enums::{EnrollmentKind, PaymentStatus, Plan};
pub use ids::EnrollmentId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing type values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid enrollment kind: {0}")]
    InvalidKind(String),

    #[error("invalid plan: {0}")]
    InvalidPlan(String),

    #[error("invalid payment status: {0}")]
    InvalidStatus(String),
}
