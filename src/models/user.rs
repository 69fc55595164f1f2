//! CMS user, role and session models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role of a CMS user.
///
/// Unknown strings are kept rather than rejected so that a newer backend
/// cannot break session loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Athlete,
    Coach,
    Manager,
    Club,
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Athlete => "athlete",
            Role::Coach => "coach",
            Role::Manager => "manager",
            Role::Club => "club",
            Role::Unknown(other) => other,
        }
    }

    /// Path segment of the role's dashboard endpoint, if it has one.
    pub fn dashboard_segment(&self) -> Option<&'static str> {
        match self {
            Role::Athlete => Some("athletes"),
            Role::Coach => Some("coaches"),
            Role::Manager => Some("managers"),
            Role::Club | Role::Unknown(_) => None,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "athlete" => Role::Athlete,
            "coach" => Role::Coach,
            "manager" => Role::Manager,
            "club" => Role::Club,
            _ => Role::Unknown(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed-in CMS user as returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user id (the API calls it `user_id`)
    #[serde(alias = "user_id")]
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token and user, always held together.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Body of a login response. Every field is optional because error
/// responses carry only `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LoginResponse {
    /// The session this response establishes, if it carries both halves.
    pub fn into_session(self) -> Option<Session> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(Session { token, user }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_backend_user_id() {
        let user: User = serde_json::from_str(
            r#"{"user_id": 7, "first_name": "A", "last_name": "B", "role": "manager", "email": "a@b.c"}"#,
        )
        .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Manager);
    }

    #[test]
    fn test_unknown_role_roundtrips() {
        let user: User = serde_json::from_str(r#"{"id": 1, "role": "referee"}"#).unwrap();
        assert_eq!(user.role, Role::Unknown("referee".to_string()));
        assert_eq!(user.role.dashboard_segment(), None);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "referee");
    }

    #[test]
    fn test_login_response_without_token_has_no_session() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"user": {"id": 1, "role": "coach", "first_name": "A", "last_name": "B"}}"#,
        )
        .unwrap();
        assert!(resp.into_session().is_none());
    }
}
