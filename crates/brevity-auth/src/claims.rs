//! Claim set carried inside bearer tokens.
//!
//! [`Claims`] has typed slots for the well-known fields the API embeds
//! (`sub`, `username`, `email`, `full_name`) and the `exp` timestamp, plus an
//! open [`Claims::extra`] map so tokens carrying additional claims still decode.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TokenError;

/// String claims that have a dedicated field on [`Claims`].
pub const STRING_CLAIMS: [&str; 4] = ["sub", "username", "email", "full_name"];

/// Claims embedded in an access token.
///
/// Every field is optional on the wire; tokens issued by
/// [`TokenAuthenticator`](crate::TokenAuthenticator) always carry `exp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Any claim without a dedicated field
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }

    /// Adds a claim.
    ///
    /// Names with a dedicated field (`sub`, `username`, `email`, `full_name`,
    /// `exp`) are stored in that field, so a name never appears twice in the
    /// encoded payload.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] when `value` cannot be represented as JSON,
    /// or when it does not fit the dedicated field (a string, or an integer for `exp`).
    pub fn insert<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> Result<(), TokenError> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|e| TokenError::Encoding(e.to_string()))?;

        if key == "exp" {
            let exp = value
                .as_i64()
                .ok_or_else(|| TokenError::Encoding("exp must be an integer timestamp".to_string()))?;
            self.exp = Some(exp);
            return Ok(());
        }

        if let Some(slot) = self.string_slot(&key) {
            let Value::String(text) = value else {
                return Err(TokenError::Encoding(format!("{key} must be a string")));
            };
            *slot = Some(text);
            return Ok(());
        }

        self.extra.insert(key, value);
        Ok(())
    }

    /// Moves well-known names that were written straight into `extra` into
    /// their dedicated fields.
    ///
    /// A dedicated field that is already set keeps its value; entries that
    /// cannot fill their field are dropped.
    pub(crate) fn fold_registered(&mut self) {
        for key in STRING_CLAIMS {
            let Some(value) = self.extra.remove(key) else {
                continue;
            };
            if let (Some(slot), Value::String(text)) = (self.string_slot(key), value) {
                if slot.is_none() {
                    *slot = Some(text);
                }
            }
        }

        if let Some(value) = self.extra.remove("exp") {
            if self.exp.is_none() {
                self.exp = value.as_i64();
            }
        }
    }

    fn string_slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "sub" => Some(&mut self.sub),
            "username" => Some(&mut self.username),
            "email" => Some(&mut self.email),
            "full_name" => Some(&mut self.full_name),
            _ => None,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// The same claim set with `exp` removed.
    pub fn without_expiry(&self) -> Self {
        let mut claims = self.clone();
        claims.exp = None;
        claims.extra.remove("exp");
        claims
    }
}
