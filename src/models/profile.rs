//! Mobile sign-in profile.

use serde::{Deserialize, Serialize};

/// How the profile was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Local,
    Google,
}

/// Profile persisted by the mobile shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Profile {
    pub fn local(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            provider: Provider::Local,
            name: None,
        }
    }
}
