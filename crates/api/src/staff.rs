// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff display-name resolution.
//!
//! Non-associations record staff by username. Display names come from the
//! user-management service, one lookup per unique username, all in flight
//! at once. A failed lookup never fails the page.

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;

use futures::future::join_all;
use nonassoc_domain::{EngineConfig, NonAssociationListItem};
use thiserror::Error;
use tracing::{debug, warn};

/// Name shown for changes made by the system user.
pub const SYSTEM_DISPLAY_NAME: &str = "System";

/// Name shown when a lookup fails.
pub const UNKNOWN_STAFF_DISPLAY_NAME: &str = "Unknown staff";

/// Errors from a staff lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaffLookupError {
    /// No such member of staff.
    #[error("Staff member '{0}' not found")]
    NotFound(String),
    /// The lookup service failed.
    #[error("Staff lookup failed: {0}")]
    Upstream(String),
}

/// A source of staff display names.
pub trait StaffDirectory {
    /// Looks up the display name for a username.
    fn display_name(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<String, StaffLookupError>> + Send;
}

/// Gathers every staff username recorded on a list of non-associations.
#[must_use]
pub fn collect_staff_usernames<'a, I>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a NonAssociationListItem>,
{
    let mut usernames = BTreeSet::new();
    for item in items {
        usernames.insert(item.authorised_by.clone());
        usernames.insert(item.updated_by.clone());
        if let Some(closed_by) = &item.closed_by {
            usernames.insert(closed_by.clone());
        }
    }
    usernames
}

/// Resolves display names for a set of usernames.
///
/// Duplicates are looked up once. The system username resolves to
/// [`SYSTEM_DISPLAY_NAME`] without a lookup; a failed lookup resolves to
/// [`UNKNOWN_STAFF_DISPLAY_NAME`].
pub async fn resolve_staff_names<D, I>(
    directory: &D,
    usernames: I,
    config: &EngineConfig,
) -> BTreeMap<String, String>
where
    D: StaffDirectory + Sync,
    I: IntoIterator + Send,
    I::Item: Into<String>,
{
    let unique: BTreeSet<String> = usernames.into_iter().map(Into::into).collect();
    let mut names: BTreeMap<String, String> = BTreeMap::new();
    let mut to_lookup: Vec<String> = Vec::with_capacity(unique.len());

    for username in unique {
        if config.is_system_user(&username) {
            names.insert(username, String::from(SYSTEM_DISPLAY_NAME));
        } else {
            to_lookup.push(username);
        }
    }

    debug!(lookups = to_lookup.len(), "Resolving staff display names");
    let results = join_all(
        to_lookup
            .iter()
            .map(|username| directory.display_name(username)),
    )
    .await;

    for (username, result) in to_lookup.into_iter().zip(results) {
        let name = match result {
            Ok(name) => name,
            Err(err) => {
                warn!(username = %username, error = %err, "Could not look up staff name");
                String::from(UNKNOWN_STAFF_DISPLAY_NAME)
            }
        };
        names.insert(username, name);
    }

    names
}
