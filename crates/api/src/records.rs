// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Projection of non-association records onto one key prisoner.

use nonassoc_domain::{
    DomainError, NonAssociation, NonAssociationListItem, OtherPrisonerDetails, Prisoner,
    validate_closure_fields, validate_distinct_prisoners,
};
use tracing::debug;

use crate::error::ApiError;

/// Projects records from the non-associations service into list items
/// seen from `key_prisoner`.
///
/// Counterparts are looked up by prisoner number in `counterparts`; one the
/// prisoner search did not return is listed with no location.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` for a record that pairs a
/// prisoner with themselves or whose closure details contradict its closed
/// flag, and `ApiError::ResourceNotFound` for a record the key prisoner is
/// not party to.
pub fn project_non_associations(
    key_prisoner: &Prisoner,
    records: &[NonAssociation],
    counterparts: &[Prisoner],
) -> Result<Vec<NonAssociationListItem>, ApiError> {
    let key_number = key_prisoner.prisoner_number.as_str();

    records
        .iter()
        .map(|record| -> Result<NonAssociationListItem, ApiError> {
            validate_distinct_prisoners(
                &record.first_prisoner_number,
                &record.second_prisoner_number,
            )?;
            validate_closure_fields(record)?;

            let other_number = record.other_prisoner_number(key_number).ok_or_else(|| {
                DomainError::PrisonerNotParty {
                    id: record.id,
                    prisoner_number: key_number.to_string(),
                }
            })?;
            let other = counterparts
                .iter()
                .find(|prisoner| prisoner.prisoner_number == other_number)
                .map_or_else(
                    || {
                        debug!(
                            id = record.id,
                            prisoner_number = other_number,
                            "Counterpart not found, listing without location"
                        );
                        OtherPrisonerDetails::unlocated(other_number)
                    },
                    OtherPrisonerDetails::from_prisoner,
                );

            Ok(record.list_item_for(key_number, other)?)
        })
        .collect()
}
