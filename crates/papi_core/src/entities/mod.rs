//! Host platform data contracts.
//!
//! # Responsibility
//! - Mirror the records the host sends and accepts, field for field.
//! - Offer declaration-level validation for the records addons author.
//!
//! # Invariants
//! - Wire names match the host schema exactly; optional fields absent on the
//!   wire deserialize to `None` and are omitted again on serialization.
//! - Unknown keys of open-ended records survive a round trip.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod addons;
pub mod crawler;
pub mod data_index;
pub mod page;
pub mod settings;

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+(\.\d+)?$").expect("valid version regex"));

/// Declaration-level validation errors for host records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    MissingField(&'static str),
    InvalidUuid { field: &'static str, value: String },
    InvalidVersion(String),
    DuplicateKey { field: &'static str, value: String },
    UnknownReference { field: &'static str, value: String },
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
            Self::InvalidUuid { field, value } => write!(f, "{field} is not a UUID: {value}"),
            Self::InvalidVersion(value) => write!(
                f,
                "version is invalid: {value} (expected major.minor.patch[.build])"
            ),
            Self::DuplicateKey { field, value } => write!(f, "{field} is duplicated: {value}"),
            Self::UnknownReference { field, value } => {
                write!(f, "{field} refers to an unknown key: {value}")
            }
        }
    }
}

impl Error for EntityValidationError {}

pub(crate) fn require_text(
    value: &str,
    field: &'static str,
) -> Result<(), EntityValidationError> {
    if value.trim().is_empty() {
        return Err(EntityValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn is_uuid(value: &str) -> bool {
    Uuid::parse_str(value.trim()).is_ok()
}

pub(crate) fn is_version_string(value: &str) -> bool {
    VERSION_RE.is_match(value)
}
