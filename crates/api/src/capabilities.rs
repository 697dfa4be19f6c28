// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities tell the presentation layer which links and buttons to
//! show. The `authorize_*` functions are the enforcing counterparts used
//! before a view or modification is carried out.

use nonassoc_domain::{Location, UserPermissions};
use tracing::debug;

use crate::error::ApiError;

/// Represents whether a specific action is permitted.
///
/// This enum provides better type safety than raw booleans and serializes
/// to JSON as true/false for API compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// What the user may do with a single prisoner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrisonerCapabilities {
    /// Whether the prisoner's profile may be opened.
    pub can_view_profile: Capability,
}

/// What the user may do with a non-association between two prisoners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonAssociationCapabilities {
    /// Whether the non-association may be viewed.
    pub can_view: Capability,
    /// Whether a non-association between the two may be added.
    pub can_add: Capability,
    /// Whether the non-association may be updated.
    pub can_update: Capability,
    /// Whether the non-association may be closed.
    pub can_close: Capability,
}

/// Computes capabilities for a single prisoner.
#[must_use]
pub fn compute_prisoner_capabilities(
    permissions: &UserPermissions,
    prisoner: &Location,
) -> PrisonerCapabilities {
    PrisonerCapabilities {
        can_view_profile: Capability::from_bool(permissions.can_view_profile(prisoner)),
    }
}

/// Computes capabilities for a non-association between two prisoners.
///
/// Adding, updating and closing share one rule.
#[must_use]
pub fn compute_non_association_capabilities(
    permissions: &UserPermissions,
    first: &Location,
    second: &Location,
) -> NonAssociationCapabilities {
    let can_write = Capability::from_bool(permissions.can_write_non_association(first, second));
    NonAssociationCapabilities {
        can_view: Capability::from_bool(permissions.can_view_non_association(first, second)),
        can_add: can_write,
        can_update: can_write,
        can_close: can_write,
    }
}

/// Checks that the user may view a non-association between two prisoners.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the user may not view it.
pub fn authorize_view_non_association(
    permissions: &UserPermissions,
    first: &Location,
    second: &Location,
) -> Result<(), ApiError> {
    if permissions.can_view_non_association(first, second) {
        return Ok(());
    }
    debug!("Denied viewing non-association");
    Err(not_found())
}

/// Checks that the user may add, update or close a non-association between
/// two prisoners.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the user may not modify it.
pub fn authorize_modify_non_association(
    permissions: &UserPermissions,
    first: &Location,
    second: &Location,
) -> Result<(), ApiError> {
    if permissions.can_write_non_association(first, second) {
        return Ok(());
    }
    debug!(
        write = permissions.write,
        first = first.establishment_id(),
        second = second.establishment_id(),
        "Denied modifying non-association"
    );
    Err(not_found())
}

fn not_found() -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Non-association"),
        message: String::from("No such non-association"),
    }
}
