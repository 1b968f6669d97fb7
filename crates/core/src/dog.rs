//! Dog domain rules: adoption status, age bounds and list filtering.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// Youngest age accepted for a dog record, in years.
pub const MIN_DOG_AGE: i64 = 0;

/// Oldest age accepted for a dog record, in years.
pub const MAX_DOG_AGE: i64 = 20;

/// The only `status` query value that narrows a dog listing.
pub const AVAILABLE_STATUS_PARAM: &str = "available";

/// Adoption status of a dog.
///
/// Stored in the `dogs.status` column as its symbolic name and always
/// serialized by name (`"AVAILABLE"`), never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DogStatus {
    Available,
    Pending,
    Adopted,
}

impl DogStatus {
    /// Symbolic name as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            DogStatus::Available => "AVAILABLE",
            DogStatus::Pending => "PENDING",
            DogStatus::Adopted => "ADOPTED",
        }
    }
}

impl fmt::Display for DogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(DogStatus::Available),
            "PENDING" => Ok(DogStatus::Pending),
            "ADOPTED" => Ok(DogStatus::Adopted),
            other => Err(CoreError::Internal(format!("unknown dog status '{other}'"))),
        }
    }
}

impl TryFrom<String> for DogStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Validate that a dog's age is between 0 and 20 (inclusive).
pub fn validate_dog_age(age: i64) -> Result<(), CoreError> {
    if !(MIN_DOG_AGE..=MAX_DOG_AGE).contains(&age) {
        return Err(CoreError::Validation(format!(
            "Dog age must be between {MIN_DOG_AGE} and {MAX_DOG_AGE} (inclusive), got {age}"
        )));
    }
    Ok(())
}

/// Filters applied to a dog listing.
///
/// `status` is an exact match on the enum while `name_contains` is a
/// case-insensitive substring match. Both combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogListFilter {
    pub status: Option<DogStatus>,
    pub name_contains: Option<String>,
}

impl DogListFilter {
    /// Build a filter from raw query-string values.
    ///
    /// Only the literal `"available"` activates the status filter; every
    /// other value is ignored. An empty name is treated as absent.
    pub fn from_params(status: Option<&str>, name: Option<&str>) -> Self {
        let status = match status {
            Some(AVAILABLE_STATUS_PARAM) => Some(DogStatus::Available),
            _ => None,
        };
        let name_contains = name.filter(|n| !n.is_empty()).map(str::to_owned);

        Self {
            status,
            name_contains,
        }
    }

    /// True when no filter narrows the listing.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.name_contains.is_none()
    }
}
