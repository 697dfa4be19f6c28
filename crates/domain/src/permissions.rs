// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role and caseload based permissions.
//!
//! Permissions are derived once per request from the user's role codes and
//! caseloads. Every role other than the base prison role is ineffective
//! without it.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::trace;

use crate::config::RoleCodes;
use crate::location::Location;

/// What a user may do with non-associations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    /// May view non-associations.
    pub read: bool,
    /// May add, update and close non-associations.
    pub write: bool,
    /// May see prisoners in transfer.
    pub global_search: bool,
    /// May see released prisoners.
    pub inactive_bookings: bool,
    /// Establishments the user works with.
    pub caseloads: BTreeSet<String>,
}

impl UserPermissions {
    /// Derives permissions from role codes and caseloads.
    ///
    /// # Arguments
    ///
    /// * `roles` - The user's role codes
    /// * `caseloads` - Establishment ids in the user's caseloads
    /// * `codes` - The role codes that grant each permission
    #[must_use]
    pub fn from_roles<R, C>(roles: R, caseloads: C, codes: &RoleCodes) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let roles: BTreeSet<String> = roles
            .into_iter()
            .map(|role| role.as_ref().to_string())
            .collect();
        let read = roles.contains(&codes.prison);
        let write = read && roles.contains(&codes.write);
        let global_search = read && roles.contains(&codes.global_search);
        let inactive_bookings = read && roles.contains(&codes.inactive_bookings);
        let caseloads: BTreeSet<String> = caseloads.into_iter().map(Into::into).collect();

        trace!(
            read,
            write,
            global_search,
            inactive_bookings,
            caseloads = caseloads.len(),
            "Derived user permissions"
        );

        Self {
            read,
            write,
            global_search,
            inactive_bookings,
            caseloads,
        }
    }

    /// Returns true if the establishment is in the user's caseloads.
    #[must_use]
    pub fn has_caseload(&self, establishment_id: &str) -> bool {
        self.caseloads.contains(establishment_id)
    }

    /// Whether the user may open a prisoner's profile.
    #[must_use]
    pub fn can_view_profile(&self, prisoner: &Location) -> bool {
        match prisoner {
            Location::BeingTransferred { .. } => self.global_search,
            Location::Outside { .. } => self.inactive_bookings,
            Location::InEstablishment {
                establishment_id, ..
            } => self.has_caseload(establishment_id),
            Location::UnknownLocation => false,
        }
    }

    /// Whether the user may view a non-association between two prisoners.
    ///
    /// Location plays no part in viewing.
    #[must_use]
    pub const fn can_view_non_association(&self, _a: &Location, _b: &Location) -> bool {
        self.read
    }

    /// Whether the user may add, update or close a non-association between
    /// two prisoners.
    ///
    /// It is enough for one of the two prisoners to be within reach: in a
    /// caseload establishment, in transfer with global search, or outside
    /// with inactive bookings.
    #[must_use]
    pub fn can_write_non_association(&self, a: &Location, b: &Location) -> bool {
        if !self.write {
            return false;
        }
        self.can_view_profile(a) || self.can_view_profile(b)
    }
}
