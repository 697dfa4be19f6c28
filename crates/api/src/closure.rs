// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closing a non-association.

use nonassoc_domain::{
    DomainError, EngineConfig, Location, NonAssociation, Prisoner, UserPermissions, classify,
    validate_closure_fields, validate_comment,
};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::info;

use crate::capabilities::authorize_modify_non_association;
use crate::error::ApiError;

/// A request to close a non-association.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseRequest {
    /// Username of the member of staff closing it.
    pub closed_by: String,
    /// Why it is being closed.
    pub closed_reason: String,
    /// When it is closed.
    #[serde(with = "time::serde::rfc3339")]
    pub closed_at: OffsetDateTime,
}

/// Closes a non-association, returning the updated record.
///
/// The key prisoner must be a party to `record`. `counterpart` is the other
/// party as returned by the prisoner search; when absent the other party
/// has no known location.
///
/// # Arguments
///
/// * `permissions` - The requesting user's permissions
/// * `key_prisoner` - The prisoner the request was made from
/// * `counterpart` - The other party, if found
/// * `record` - The non-association to close
/// * `request` - Who is closing it, why and when
/// * `config` - Engine configuration
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the user may not modify the
/// non-association or the key prisoner is not a party to it,
/// `ApiError::DomainRuleViolation` if it is already closed, and
/// `ApiError::InvalidInput` if the reason is blank or too long.
pub fn close_non_association(
    permissions: &UserPermissions,
    key_prisoner: &Prisoner,
    counterpart: Option<&Prisoner>,
    record: &NonAssociation,
    request: CloseRequest,
    config: &EngineConfig,
) -> Result<NonAssociation, ApiError> {
    let Some(other_number) = record.other_prisoner_number(&key_prisoner.prisoner_number) else {
        return Err(DomainError::PrisonerNotParty {
            id: record.id,
            prisoner_number: key_prisoner.prisoner_number.clone(),
        }
        .into());
    };

    let key_location = classify(key_prisoner, &config.sentinels);
    let other_location = counterpart
        .filter(|prisoner| prisoner.prisoner_number == other_number)
        .map_or(Location::UnknownLocation, |prisoner| {
            classify(prisoner, &config.sentinels)
        });
    authorize_modify_non_association(permissions, &key_location, &other_location)?;

    if record.is_closed {
        return Err(DomainError::AlreadyClosed(record.id).into());
    }
    validate_comment(&request.closed_reason, config.max_comment_length).map_err(|err| {
        ApiError::InvalidInput {
            field: String::from("closedReason"),
            message: err.to_string(),
        }
    })?;

    let mut closed = record.clone();
    closed.is_closed = true;
    closed.updated_by.clone_from(&request.closed_by);
    closed.when_updated = request.closed_at;
    closed.closed_at = Some(request.closed_at);
    closed.closed_reason = Some(request.closed_reason);
    closed.closed_by = Some(request.closed_by);
    validate_closure_fields(&closed)?;

    info!(
        id = closed.id,
        closed_by = closed.updated_by.as_str(),
        "Closed non-association"
    );
    Ok(closed)
}
