// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assembly of a key prisoner's non-association list.

use nonassoc_domain::{
    EngineConfig, GroupedNonAssociations, Location, NonAssociationListItem, Prisoner,
    UserPermissions, classify, group_by_location, sort_non_associations, validate_closure_fields,
};
use serde::Serialize;
use tracing::debug;

use crate::capabilities::{
    Capability, NonAssociationCapabilities, PrisonerCapabilities, authorize_view_non_association,
    compute_non_association_capabilities, compute_prisoner_capabilities,
};
use crate::error::ApiError;
use crate::query::ListQuery;

/// One row of a non-association list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonAssociationRow {
    /// The non-association, from the key prisoner's side.
    #[serde(flatten)]
    pub item: NonAssociationListItem,
    /// Where the counterpart is, as shown to staff.
    pub other_prisoner_location: String,
    /// Whether the counterpart's profile may be opened.
    pub can_view_other_profile: Capability,
    /// What may be done with this non-association.
    pub capabilities: NonAssociationCapabilities,
}

/// A key prisoner's non-associations, grouped and ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonAssociationListView {
    /// The key prisoner's number.
    pub prisoner_number: String,
    /// The key prisoner's location.
    pub key_location: Location,
    /// The key prisoner's location, as shown to staff.
    pub key_location_description: String,
    /// What may be done with the key prisoner.
    pub key_capabilities: PrisonerCapabilities,
    /// Whether a new non-association may be added for the key prisoner.
    pub can_add: Capability,
    /// The tab and ordering shown.
    #[serde(flatten)]
    pub query: ListQuery,
    /// Number of open non-associations, regardless of tab.
    pub open_count: usize,
    /// Number of closed non-associations, regardless of tab.
    pub closed_count: usize,
    /// The rows on this tab.
    pub groups: GroupedNonAssociations<NonAssociationRow>,
}

/// Builds the list view for a key prisoner.
///
/// Items not on the requested tab are dropped, the rest are grouped by the
/// counterpart's location and each group is ordered by the query.
///
/// # Arguments
///
/// * `permissions` - The requesting user's permissions
/// * `key_prisoner` - The prisoner whose list is being viewed
/// * `items` - The key prisoner's non-associations
/// * `query` - The validated list query
/// * `config` - Engine configuration
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the user may not view
/// non-associations at all, or `ApiError::DomainRuleViolation` if an item's
/// closure details contradict its closed flag.
pub fn build_list_view(
    permissions: &UserPermissions,
    key_prisoner: &Prisoner,
    items: Vec<NonAssociationListItem>,
    query: &ListQuery,
    config: &EngineConfig,
) -> Result<NonAssociationListView, ApiError> {
    if !permissions.read {
        debug!(
            prisoner_number = %key_prisoner.prisoner_number,
            "Denied viewing non-association list"
        );
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Prisoner"),
            message: format!("No prisoner {}", key_prisoner.prisoner_number),
        });
    }

    for item in &items {
        validate_closure_fields(item)?;
    }

    let key_location = classify(key_prisoner, &config.sentinels);

    let closed_count = items.iter().filter(|item| item.is_closed).count();
    let open_count = items.len() - closed_count;
    let on_tab: Vec<NonAssociationListItem> = items
        .into_iter()
        .filter(|item| query.tab.includes(item.is_closed))
        .collect();

    let mut grouped = group_by_location(&key_location, on_tab, &config.sentinels);
    for group in grouped.groups_mut() {
        sort_non_associations(group, query.sort, query.order);
    }

    debug!(
        prisoner_number = %key_prisoner.prisoner_number,
        tab = query.tab.as_str(),
        sort = query.sort.as_str(),
        order = query.order.as_str(),
        rows = grouped.len(),
        open_count,
        closed_count,
        "Built non-association list"
    );

    let groups = grouped.map_items(|item| build_row(permissions, &key_location, item, config));

    // Adding needs the key prisoner within reach, whoever the counterpart is.
    let can_add =
        compute_non_association_capabilities(permissions, &key_location, &key_location).can_add;

    Ok(NonAssociationListView {
        prisoner_number: key_prisoner.prisoner_number.clone(),
        key_location_description: key_location.description().to_string(),
        key_capabilities: compute_prisoner_capabilities(permissions, &key_location),
        key_location,
        can_add,
        query: *query,
        open_count,
        closed_count,
        groups,
    })
}

/// Builds the row for a single non-association of a key prisoner.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if there is no such non-association
/// or the user may not view it, or `ApiError::DomainRuleViolation` if its
/// closure details contradict its closed flag.
pub fn build_detail_view(
    permissions: &UserPermissions,
    key_prisoner: &Prisoner,
    items: Vec<NonAssociationListItem>,
    id: i64,
    config: &EngineConfig,
) -> Result<NonAssociationRow, ApiError> {
    let Some(item) = items.into_iter().find(|item| item.id == id) else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Non-association"),
            message: format!("No non-association {id}"),
        });
    };
    validate_closure_fields(&item)?;

    let key_location = classify(key_prisoner, &config.sentinels);
    let other_location = classify(&item.other_prisoner_details, &config.sentinels);
    authorize_view_non_association(permissions, &key_location, &other_location)?;

    Ok(build_row(permissions, &key_location, item, config))
}

fn build_row(
    permissions: &UserPermissions,
    key_location: &Location,
    item: NonAssociationListItem,
    config: &EngineConfig,
) -> NonAssociationRow {
    let other_location = classify(&item.other_prisoner_details, &config.sentinels);
    NonAssociationRow {
        other_prisoner_location: other_location.description().to_string(),
        can_view_other_profile: compute_prisoner_capabilities(permissions, &other_location)
            .can_view_profile,
        capabilities: compute_non_association_capabilities(
            permissions,
            key_location,
            &other_location,
        ),
        item,
    }
}
