use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, validate_email, validate_phone};

/// Identity of a user record, assigned by the remote source.
///
/// The endpoint may send ids as JSON numbers or strings. Numeric ids sort
/// numerically and before textual ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

/// One user as returned by the users endpoint.
///
/// Extra fields in the payload (address, company, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

/// The fixed column schema of the grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Id,
    Name,
    Username,
    Email,
    Phone,
}

impl UserField {
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::Name,
        Self::Username,
        Self::Email,
        Self::Phone,
    ];

    /// Accessor key, matching the JSON field name.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub const fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }

    /// `id` is display-only; every other column can be edited inline.
    pub const fn is_editable(self) -> bool {
        !matches!(self, Self::Id)
    }

    /// Numeric columns start sorting descending on first click.
    pub const fn sorts_descending_first(self) -> bool {
        matches!(self, Self::Id)
    }

    /// Rendered cell text for `record`.
    pub fn value(self, record: &UserRecord) -> Cow<'_, str> {
        match self {
            Self::Id => Cow::Owned(record.id.to_string()),
            Self::Name => Cow::Borrowed(&record.name),
            Self::Username => Cow::Borrowed(&record.username),
            Self::Email => Cow::Borrowed(&record.email),
            Self::Phone => Cow::Borrowed(&record.phone),
        }
    }

    /// Runs the validator attached to this column, if it has one.
    pub fn validate(self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Email if !validate_email(value) => Err(ValidationError::InvalidEmail),
            Self::Phone if !validate_phone(value) => Err(ValidationError::InvalidPhone),
            _ => Ok(()),
        }
    }

    /// A copy of `record` with this field set to `value`.
    ///
    /// Returns `None` for the display-only `id` column.
    pub fn with_value(self, record: &UserRecord, value: String) -> Option<UserRecord> {
        let mut updated = record.clone();
        match self {
            Self::Id => return None,
            Self::Name => updated.name = value,
            Self::Username => updated.username = value,
            Self::Email => updated.email = value,
            Self::Phone => updated.phone = value,
        }
        Some(updated)
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
