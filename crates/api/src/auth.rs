// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The authenticated user, as supplied by the identity service.

use nonassoc_domain::{RoleCodes, UserPermissions};
use serde::{Deserialize, Serialize};

/// An authenticated member of staff.
///
/// Token handling happens upstream; by the time a request reaches this
/// crate the user's roles and caseloads have been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// The staff username.
    pub username: String,
    /// The name shown in the interface.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Role codes granted to the user.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Establishment ids of the user's caseloads.
    #[serde(default)]
    pub caseloads: Vec<String>,
    /// The caseload the user is currently working in.
    #[serde(default)]
    pub active_caseload: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// # Arguments
    ///
    /// * `username` - The staff username
    /// * `roles` - Role codes granted to the user
    /// * `caseloads` - Establishment ids of the user's caseloads
    #[must_use]
    pub const fn new(username: String, roles: Vec<String>, caseloads: Vec<String>) -> Self {
        Self {
            username,
            display_name: None,
            roles,
            caseloads,
            active_caseload: None,
        }
    }

    /// Derives this user's non-association permissions.
    #[must_use]
    pub fn permissions(&self, codes: &RoleCodes) -> UserPermissions {
        UserPermissions::from_roles(&self.roles, self.caseloads.iter().cloned(), codes)
    }
}
