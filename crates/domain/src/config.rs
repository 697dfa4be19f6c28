// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration.
//!
//! Role codes, sentinel establishment ids and the reserved system username
//! are part of the contract with the upstream services. They are carried in
//! an explicit configuration value and passed into every rule that needs
//! them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Default maximum length of a non-association comment, in characters.
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 240;

/// Establishment ids that stand in for "no establishment".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationSentinels {
    /// Establishment id used while a prisoner is being transferred.
    pub transfer: String,
    /// Establishment id used once a prisoner has been released.
    pub outside: String,
}

impl Default for LocationSentinels {
    fn default() -> Self {
        Self {
            transfer: String::from("TRN"),
            outside: String::from("OUT"),
        }
    }
}

/// Role codes that grant non-association permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleCodes {
    /// Base role held by all prison staff. Every other role requires it.
    pub prison: String,
    /// Role allowing non-associations to be added, updated and closed.
    pub write: String,
    /// Role allowing access to prisoners in transfer.
    pub global_search: String,
    /// Role allowing access to released prisoners.
    pub inactive_bookings: String,
}

impl Default for RoleCodes {
    fn default() -> Self {
        Self {
            prison: String::from("ROLE_PRISON"),
            write: String::from("ROLE_NON_ASSOCIATIONS"),
            global_search: String::from("ROLE_GLOBAL_SEARCH"),
            inactive_bookings: String::from("ROLE_INACTIVE_BOOKINGS"),
        }
    }
}

/// Configuration shared by all engine components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Sentinel establishment ids.
    pub sentinels: LocationSentinels,
    /// Role codes.
    pub roles: RoleCodes,
    /// Username recorded when a change was made by an automated process.
    pub system_username: String,
    /// Maximum comment length, in characters.
    pub max_comment_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sentinels: LocationSentinels::default(),
            roles: RoleCodes::default(),
            system_username: String::from("NON_ASSOCIATIONS_SYSTEM"),
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfig` if the document is malformed or
    /// contains unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }

    /// Returns true if `username` is the reserved system username.
    #[must_use]
    pub fn is_system_user(&self, username: &str) -> bool {
        username == self.system_username
    }
}
