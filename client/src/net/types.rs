//! Wire DTOs for the remote auth API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly (snake_case), so these types
//! derive serde without renames. Fields the backend may omit are defaulted so
//! an older backend never breaks hydration.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Tier reported for members whose record carries none.
pub const DEFAULT_TIER: &str = "FREE";

/// Shown when a linked Discord account has no username on record.
pub const UNKNOWN_DISCORD_USERNAME: &str = "Discord user";

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub age_group: String,
    pub trading_expertise: String,
    pub focus_areas: Vec<String>,
}

/// Token issued by login and signup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `GET /discord/oauth/url` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordUrlResponse {
    pub url: String,
}

/// Error body returned by the backend. `detail` is a string for handled
/// errors and a list of field errors for request validation failures.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// The human-readable detail, if the backend sent one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}

/// The authenticated member, as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub trading_expertise: String,
    /// Comma-delimited tag list.
    #[serde(default)]
    pub focus_areas: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub discord_user_id: Option<String>,
    #[serde(default)]
    pub discord_username: Option<String>,
}

/// Whether the member has linked a Discord account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiscordStatus {
    /// No account linked: the dashboard shows the connect prompt.
    NotLinked,
    /// Linked: the dashboard shows the connected confirmation.
    Linked { username: String },
}

impl User {
    /// Focus areas split into trimmed, non-empty tags.
    #[must_use]
    pub fn focus_tags(&self) -> Vec<String> {
        self.focus_areas
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Discord link state, derived only from `discord_user_id`.
    #[must_use]
    pub fn discord_status(&self) -> DiscordStatus {
        match self.discord_user_id {
            Some(_) => DiscordStatus::Linked {
                username: self
                    .discord_username
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(UNKNOWN_DISCORD_USERNAME)
                    .to_owned(),
            },
            None => DiscordStatus::NotLinked,
        }
    }

    /// Name used in greetings.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        if first.is_empty() { self.email.clone() } else { first.to_owned() }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_owned()
    }

    #[must_use]
    pub fn tier_label(&self) -> String {
        self.tier
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TIER)
            .to_owned()
    }
}
