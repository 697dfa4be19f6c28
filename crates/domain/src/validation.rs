// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::EngineConfig;
use crate::error::DomainError;
use crate::types::{NonAssociation, NonAssociationListItem};

/// The closure state carried by both shapes of a non-association.
pub trait ClosureFields {
    /// The non-association identifier.
    fn id(&self) -> i64;
    /// Whether the non-association claims to be closed.
    fn is_closed(&self) -> bool;
    /// Presence of closed-by, closed-reason and closed-at, in that order.
    fn closure_fields_present(&self) -> [bool; 3];
}

impl ClosureFields for NonAssociation {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn closure_fields_present(&self) -> [bool; 3] {
        [
            self.closed_by.is_some(),
            self.closed_reason.is_some(),
            self.closed_at.is_some(),
        ]
    }
}

impl ClosureFields for NonAssociationListItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn closure_fields_present(&self) -> [bool; 3] {
        [
            self.closed_by.is_some(),
            self.closed_reason.is_some(),
            self.closed_at.is_some(),
        ]
    }
}

/// Validates that the closure fields agree with the closed flag.
///
/// An open non-association has no closure details at all; a closed one has
/// all of them.
///
/// # Errors
///
/// Returns `DomainError::ClosureFieldsInconsistent` if only some closure
/// fields are present, or if their presence contradicts `is_closed`.
pub fn validate_closure_fields<T: ClosureFields + ?Sized>(record: &T) -> Result<(), DomainError> {
    let is_closed = record.is_closed();
    if record
        .closure_fields_present()
        .iter()
        .all(|&present| present == is_closed)
    {
        Ok(())
    } else {
        Err(DomainError::ClosureFieldsInconsistent {
            id: record.id(),
            is_closed,
        })
    }
}

/// Validates a non-association comment.
///
/// # Arguments
///
/// * `comment` - The comment text
/// * `max_length` - Maximum length in characters
///
/// # Errors
///
/// Returns `DomainError::InvalidComment` if the comment is blank or longer
/// than `max_length` characters.
pub fn validate_comment(comment: &str, max_length: usize) -> Result<(), DomainError> {
    if comment.trim().is_empty() {
        return Err(DomainError::InvalidComment(String::from(
            "Comment cannot be empty",
        )));
    }

    let length: usize = comment.chars().count();
    if length > max_length {
        return Err(DomainError::InvalidComment(format!(
            "Comment must be {max_length} characters or less, but is {length}"
        )));
    }

    Ok(())
}

/// Validates that a non-association is between two different prisoners.
///
/// # Errors
///
/// Returns `DomainError::SamePrisoner` if both prisoner numbers are equal,
/// ignoring case.
pub fn validate_distinct_prisoners(
    first_prisoner_number: &str,
    second_prisoner_number: &str,
) -> Result<(), DomainError> {
    if first_prisoner_number.eq_ignore_ascii_case(second_prisoner_number) {
        return Err(DomainError::SamePrisoner(
            first_prisoner_number.to_uppercase(),
        ));
    }
    Ok(())
}

/// Validates a whole non-association record.
///
/// # Errors
///
/// Returns the first rule violation found.
pub fn validate_non_association(
    non_association: &NonAssociation,
    config: &EngineConfig,
) -> Result<(), DomainError> {
    validate_distinct_prisoners(
        &non_association.first_prisoner_number,
        &non_association.second_prisoner_number,
    )?;
    validate_comment(&non_association.comment, config.max_comment_length)?;
    validate_closure_fields(non_association)
}
