//! Authenticated identity read from session storage.
//!
//! The login flow (outside this crate) stores `{"type": "Employee", "email":
//! "a@a"}` under the `user` key. Some clients serialise that JSON twice, so
//! the decoder accepts a JSON string whose content is the object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage key holding the serialised identity.
pub const USER_STORAGE_KEY: &str = "user";

/// Storage key holding the bearer token for the bills API.
pub const JWT_STORAGE_KEY: &str = "jwt";

/// Role of the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Files bills and previews receipts.
    Employee,
    /// Reviews every employee's bills.
    Admin,
}

/// Failure decoding the stored identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The stored value is not an identity record.
    #[error("malformed stored identity: {message}")]
    Malformed {
        /// Decoder message.
        message: String,
    },
}

/// Identity persisted at login.
///
/// # Examples
/// ```
/// use billed::domain::{Identity, Role};
///
/// let identity = Identity::from_stored(r#"{"type":"Employee","email":"a@a"}"#)
///     .expect("valid identity");
/// assert_eq!(identity.role(), Role::Employee);
/// assert_eq!(identity.email(), Some("a@a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "type")]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl Identity {
    /// Construct an identity.
    pub fn new(role: Role, email: Option<String>) -> Self {
        Self { role, email }
    }

    /// Employee identity with the given email.
    pub fn employee(email: impl Into<String>) -> Self {
        Self::new(Role::Employee, Some(email.into()))
    }

    /// Admin identity with the given email.
    pub fn admin(email: impl Into<String>) -> Self {
        Self::new(Role::Admin, Some(email.into()))
    }

    /// Role of the user.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Email of the user, when recorded.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Whether this identity may create bills.
    pub fn is_employee(&self) -> bool {
        self.role == Role::Employee
    }

    /// Decode the value stored under [`USER_STORAGE_KEY`].
    pub fn from_stored(raw: &str) -> Result<Self, IdentityError> {
        let value: Value = serde_json::from_str(raw).map_err(malformed)?;
        let value = match value {
            Value::String(inner) => serde_json::from_str(&inner).map_err(malformed)?,
            other => other,
        };
        serde_json::from_value(value).map_err(malformed)
    }

    /// Encode for storage under [`USER_STORAGE_KEY`].
    pub fn to_stored(&self) -> Result<String, IdentityError> {
        serde_json::to_string(self).map_err(malformed)
    }
}

fn malformed(error: serde_json::Error) -> IdentityError {
    IdentityError::Malformed {
        message: error.to_string(),
    }
}
