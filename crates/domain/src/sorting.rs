// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ordering of non-association lists.
//!
//! Timestamp keys compare chronologically; an open non-association has no
//! closure time and compares as the Unix epoch. Text keys compare with a
//! collation that ignores accents and case first, then puts unaccented
//! before accented and lowercase before uppercase; a missing value compares
//! as the empty string.
//! Name, prisoner number, establishment and cell keys all refer to the
//! counterpart prisoner.
//!
//! Descending order negates the comparator rather than reversing an
//! ascending result.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::DomainError;
use crate::types::NonAssociationListItem;

/// The field a non-association list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    /// When the non-association was created.
    WhenCreated,
    /// When the non-association was last updated.
    WhenUpdated,
    /// When the non-association was closed.
    WhenClosed,
    /// Counterpart's last name.
    LastName,
    /// Counterpart's first name.
    FirstName,
    /// Counterpart's prisoner number.
    PrisonerNumber,
    /// Counterpart's establishment id.
    PrisonId,
    /// Counterpart's establishment name.
    PrisonName,
    /// Counterpart's cell location.
    CellLocation,
}

impl SortBy {
    /// Every sort field, in display order.
    pub const ALL: [Self; 9] = [
        Self::WhenCreated,
        Self::WhenUpdated,
        Self::WhenClosed,
        Self::LastName,
        Self::FirstName,
        Self::PrisonerNumber,
        Self::PrisonId,
        Self::PrisonName,
        Self::CellLocation,
    ];

    /// Returns the query-string code for this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WhenCreated => "WHEN_CREATED",
            Self::WhenUpdated => "WHEN_UPDATED",
            Self::WhenClosed => "WHEN_CLOSED",
            Self::LastName => "LAST_NAME",
            Self::FirstName => "FIRST_NAME",
            Self::PrisonerNumber => "PRISONER_NUMBER",
            Self::PrisonId => "PRISON_ID",
            Self::PrisonName => "PRISON_NAME",
            Self::CellLocation => "CELL_LOCATION",
        }
    }

    /// Compares two items by this field in ascending order.
    #[must_use]
    pub fn compare(&self, a: &NonAssociationListItem, b: &NonAssociationListItem) -> Ordering {
        let (pa, pb) = (&a.other_prisoner_details, &b.other_prisoner_details);
        match self {
            Self::WhenCreated => a.when_created.cmp(&b.when_created),
            Self::WhenUpdated => a.when_updated.cmp(&b.when_updated),
            Self::WhenClosed => closed_or_epoch(a).cmp(&closed_or_epoch(b)),
            Self::LastName => locale_compare(&pa.last_name, &pb.last_name),
            Self::FirstName => locale_compare(&pa.first_name, &pb.first_name),
            Self::PrisonerNumber => locale_compare(&pa.prisoner_number, &pb.prisoner_number),
            Self::PrisonId => locale_compare_opt(pa.prison_id.as_deref(), pb.prison_id.as_deref()),
            Self::PrisonName => {
                locale_compare_opt(pa.prison_name.as_deref(), pb.prison_name.as_deref())
            }
            Self::CellLocation => {
                locale_compare_opt(pa.cell_location.as_deref(), pb.cell_location.as_deref())
            }
        }
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort_by| sort_by.as_str() == s)
            .ok_or_else(|| DomainError::InvalidSortBy(s.to_string()))
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[serde(rename = "ASC")]
    Ascending,
    /// Largest first.
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    /// Returns the query-string code for this direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Applies this direction to an ascending comparison.
    #[must_use]
    pub const fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Self::Ascending),
            "DESC" => Ok(Self::Descending),
            _ => Err(DomainError::InvalidSortDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orders a list of non-associations in place.
pub fn sort_non_associations(
    items: &mut [NonAssociationListItem],
    sort_by: SortBy,
    direction: SortDirection,
) {
    items.sort_by(|a, b| direction.apply(sort_by.compare(a, b)));
}

/// Orders a list of non-associations by query-string codes.
///
/// Callers are expected to have validated the codes already; anything
/// outside the enumerated sets is rejected before the list is touched.
///
/// # Errors
///
/// Returns `DomainError::InvalidSortBy` or `DomainError::InvalidSortDirection`
/// for an unknown code.
pub fn sort_by_code(
    items: &mut [NonAssociationListItem],
    sort_by: &str,
    direction: &str,
) -> Result<(), DomainError> {
    let sort_by: SortBy = sort_by.parse()?;
    let direction: SortDirection = direction.parse()?;
    sort_non_associations(items, sort_by, direction);
    Ok(())
}

fn closed_or_epoch(item: &NonAssociationListItem) -> OffsetDateTime {
    item.closed_at.unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

fn locale_compare_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    locale_compare(a.unwrap_or_default(), b.unwrap_or_default())
}

/// Compares strings the way an English-locale collation does.
///
/// Letters compare first with accents and case ignored, then unaccented
/// before accented, then lowercase before uppercase.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        // Lowercase before uppercase.
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
