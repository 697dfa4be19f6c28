// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod grouping;
mod location;
mod permissions;
mod sorting;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_MAX_COMMENT_LENGTH, EngineConfig, LocationSentinels, RoleCodes};
pub use error::DomainError;
pub use grouping::{GroupedNonAssociations, group_by_location};
pub use location::{Location, PrisonerLocationFields, classify};
pub use permissions::UserPermissions;
pub use sorting::{SortBy, SortDirection, locale_compare, sort_by_code, sort_non_associations};
pub use types::{
    NonAssociation, NonAssociationListItem, OtherPrisonerDetails, Prisoner, PrisonerRole, Reason,
    RestrictionType,
};
pub use validation::{
    ClosureFields, validate_closure_fields, validate_comment, validate_distinct_prisoners,
    validate_non_association,
};
