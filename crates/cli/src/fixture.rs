// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture files standing in for the upstream services.

use std::collections::BTreeMap;
use std::future::Future;

use futures::future::ready;
use nonassoc_api::{
    ApiError, AuthenticatedUser, StaffDirectory, StaffLookupError, project_non_associations,
};
use nonassoc_domain::{NonAssociation, NonAssociationListItem, Prisoner};
use serde::Deserialize;

/// Everything needed to build one key prisoner's list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// The user viewing the list.
    pub user: AuthenticatedUser,
    /// The key prisoner.
    pub prisoner: Prisoner,
    /// The key prisoner's non-associations, as the service records them.
    #[serde(default)]
    pub non_associations: Vec<NonAssociation>,
    /// Counterparts, as returned by the prisoner search.
    #[serde(default)]
    pub prisoners: Vec<Prisoner>,
    /// Staff display names by username.
    #[serde(default)]
    pub staff: BTreeMap<String, String>,
}

impl Fixture {
    /// Parses a fixture from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the JSON does not describe a fixture.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The key prisoner's non-associations, seen from their side.
    ///
    /// # Errors
    ///
    /// Returns an error for a record that breaks a domain rule or does not
    /// involve the key prisoner.
    pub fn list_items(&self) -> Result<Vec<NonAssociationListItem>, ApiError> {
        project_non_associations(&self.prisoner, &self.non_associations, &self.prisoners)
    }

    /// Finds a non-association and the other party to it.
    pub fn record(&self, id: i64) -> Option<(&NonAssociation, Option<&Prisoner>)> {
        let record = self.non_associations.iter().find(|record| record.id == id)?;
        let counterpart = record
            .other_prisoner_number(&self.prisoner.prisoner_number)
            .and_then(|number| {
                self.prisoners
                    .iter()
                    .find(|prisoner| prisoner.prisoner_number == number)
            });
        Some((record, counterpart))
    }
}

/// Staff directory answering from a fixture's `staff` map.
pub struct FixtureStaffDirectory<'a> {
    staff: &'a BTreeMap<String, String>,
}

impl<'a> FixtureStaffDirectory<'a> {
    #[must_use]
    pub const fn new(staff: &'a BTreeMap<String, String>) -> Self {
        Self { staff }
    }
}

impl StaffDirectory for FixtureStaffDirectory<'_> {
    fn display_name(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<String, StaffLookupError>> + Send {
        ready(
            self.staff
                .get(username)
                .cloned()
                .ok_or_else(|| StaffLookupError::NotFound(username.to_string())),
        )
    }
}
