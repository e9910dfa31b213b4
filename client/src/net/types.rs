//! Wire DTOs for the SmartPlate auth API.
//!
//! DESIGN
//! ======
//! Request and response shapes mirror the backend's JSON bodies. Decoding is
//! lenient where the backend is loose (numeric ids, unknown roles) so a
//! surprising payload degrades to "no role" instead of a failed sign-in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Platform role assigned by the backend at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Ngo,
    Volunteer,
    Admin,
}

impl Role {
    /// Every role, in dashboard order.
    pub const ALL: [Role; 4] = [Role::Donor, Role::Ngo, Role::Volunteer, Role::Admin];

    /// Roles a visitor may pick for themselves when signing up.
    /// Admins are provisioned out of band.
    pub const SIGN_UP_OPTIONS: [Role; 3] = [Role::Donor, Role::Ngo, Role::Volunteer];

    /// Wire name (`"donor"`, `"ngo"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Ngo => "ngo",
            Self::Volunteer => "volunteer",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Donor => "Donor",
            Self::Ngo => "NGO",
            Self::Volunteer => "Volunteer",
            Self::Admin => "Admin",
        }
    }

    /// One-line description shown next to the role picker.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Donor => "Donate surplus food",
            Self::Ngo => "Receive food donations",
            Self::Volunteer => "Deliver food",
            Self::Admin => "Oversee the platform",
        }
    }

    /// Whether a visitor may choose this role on the sign-up form.
    #[must_use]
    pub fn is_self_assignable(self) -> bool {
        Self::SIGN_UP_OPTIONS.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Self::Donor),
            "ngo" => Ok(Self::Ngo),
            "volunteer" => Ok(Self::Volunteer),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// User record as issued by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user id. Accepts JSON strings or integers.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// `None` when the backend sent no role or one this client does not know.
    #[serde(default, deserialize_with = "deserialize_role_lenient")]
    pub role: Option<Role>,
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Error body returned by the backend on rejection.
///
/// `detail` is usually a string but validation failures may carry a list, so
/// it is decoded as a raw value and only string details are surfaced.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable detail, when the backend sent a non-empty string.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_role_lenient<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(name)) => name.parse().ok(),
        _ => None,
    })
}
