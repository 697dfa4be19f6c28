// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouping of non-association lists by the counterpart's location.
//!
//! When the key prisoner is in an establishment the list splits three ways:
//! same establishment, other establishments, and transfer/outside. Otherwise
//! "same establishment" has no meaning and the list splits two ways: any
//! establishment, and transfer/outside. A counterpart whose location is
//! unknown always lands with transfer/outside.

use serde::Serialize;

use crate::config::LocationSentinels;
use crate::location::{Location, classify};
use crate::types::NonAssociationListItem;

/// A non-association list split by location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GroupedNonAssociations<T = NonAssociationListItem> {
    /// The list was empty.
    NoGroups,
    /// The key prisoner is in an establishment.
    ThreeGroups {
        /// Counterparts in the key prisoner's establishment.
        same: Vec<T>,
        /// Counterparts in other establishments.
        other: Vec<T>,
        /// Counterparts in transfer, outside, or in an unknown location.
        outside: Vec<T>,
    },
    /// The key prisoner is not in an establishment.
    TwoGroups {
        /// Counterparts in any establishment.
        any: Vec<T>,
        /// Counterparts in transfer, outside, or in an unknown location.
        outside: Vec<T>,
    },
}

impl<T> GroupedNonAssociations<T> {
    /// Total number of items across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::NoGroups => 0,
            Self::ThreeGroups {
                same,
                other,
                outside,
            } => same.len() + other.len() + outside.len(),
            Self::TwoGroups { any, outside } => any.len() + outside.len(),
        }
    }

    /// Returns true if there are no items in any group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every item, group by group.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        let groups: Vec<&Vec<T>> = match self {
            Self::NoGroups => Vec::new(),
            Self::ThreeGroups {
                same,
                other,
                outside,
            } => vec![same, other, outside],
            Self::TwoGroups { any, outside } => vec![any, outside],
        };
        groups.into_iter().flatten()
    }

    /// Returns each group for in-place reordering.
    pub fn groups_mut(&mut self) -> Vec<&mut Vec<T>> {
        match self {
            Self::NoGroups => Vec::new(),
            Self::ThreeGroups {
                same,
                other,
                outside,
            } => vec![same, other, outside],
            Self::TwoGroups { any, outside } => vec![any, outside],
        }
    }

    /// Transforms every item while keeping the grouping.
    pub fn map_items<U, F>(self, mut f: F) -> GroupedNonAssociations<U>
    where
        F: FnMut(T) -> U,
    {
        let mut map = |group: Vec<T>| group.into_iter().map(&mut f).collect::<Vec<U>>();
        match self {
            Self::NoGroups => GroupedNonAssociations::NoGroups,
            Self::ThreeGroups {
                same,
                other,
                outside,
            } => GroupedNonAssociations::ThreeGroups {
                same: map(same),
                other: map(other),
                outside: map(outside),
            },
            Self::TwoGroups { any, outside } => GroupedNonAssociations::TwoGroups {
                any: map(any),
                outside: map(outside),
            },
        }
    }
}

/// Splits a key prisoner's non-associations by the counterpart's location.
///
/// Items keep their input order within each group.
#[must_use]
pub fn group_by_location(
    key_prisoner: &Location,
    items: Vec<NonAssociationListItem>,
    sentinels: &LocationSentinels,
) -> GroupedNonAssociations {
    if items.is_empty() {
        return GroupedNonAssociations::NoGroups;
    }

    if let Some(key_establishment) = key_prisoner.establishment_id() {
        let mut same = Vec::new();
        let mut other = Vec::new();
        let mut outside = Vec::new();
        for item in items {
            match classify(&item.other_prisoner_details, sentinels).establishment_id() {
                None => outside.push(item),
                Some(id) if id == key_establishment => same.push(item),
                Some(_) => other.push(item),
            }
        }
        GroupedNonAssociations::ThreeGroups {
            same,
            other,
            outside,
        }
    } else {
        let (any, outside) = items.into_iter().partition(|item| {
            classify(&item.other_prisoner_details, sentinels).is_in_establishment()
        });
        GroupedNonAssociations::TwoGroups { any, outside }
    }
}
