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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod capabilities;
mod closure;
mod error;
mod listing;
mod query;
mod records;
mod staff;

#[cfg(test)]
mod tests;

pub use auth::AuthenticatedUser;
pub use capabilities::{
    Capability, NonAssociationCapabilities, PrisonerCapabilities,
    authorize_modify_non_association, authorize_view_non_association,
    compute_non_association_capabilities, compute_prisoner_capabilities,
};
pub use closure::{CloseRequest, close_non_association};
pub use error::{ApiError, translate_domain_error};
pub use listing::{
    NonAssociationListView, NonAssociationRow, build_detail_view, build_list_view,
};
pub use query::{ListQuery, ListTab};
pub use records::project_non_associations;
pub use staff::{
    SYSTEM_DISPLAY_NAME, StaffDirectory, StaffLookupError, UNKNOWN_STAFF_DISPLAY_NAME,
    collect_staff_usernames, resolve_staff_names,
};
