// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use nonassoc_api::{
    ApiError, CloseRequest, ListQuery, NonAssociationListView, NonAssociationRow,
    build_detail_view, build_list_view, close_non_association, collect_staff_usernames,
    resolve_staff_names,
};
use nonassoc_domain::{EngineConfig, NonAssociation, NonAssociationListItem};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::fixture::{Fixture, FixtureStaffDirectory};

/// A list view with the display names of every member of staff it shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(flatten)]
    pub view: NonAssociationListView,
    pub staff_names: BTreeMap<String, String>,
}

/// One non-association with the display names of the staff it mentions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailReport {
    #[serde(flatten)]
    pub row: NonAssociationRow,
    pub staff_names: BTreeMap<String, String>,
}

/// Builds the list report for a fixture.
///
/// # Errors
///
/// Returns an error if a record is malformed or the user may not view the
/// key prisoner's list.
pub async fn build_report(
    fixture: &Fixture,
    query: &ListQuery,
    config: &EngineConfig,
) -> Result<Report, ApiError> {
    let permissions = fixture.user.permissions(&config.roles);
    info!(
        username = %fixture.user.username,
        prisoner_number = %fixture.prisoner.prisoner_number,
        "Building non-association list"
    );

    let view = build_list_view(
        &permissions,
        &fixture.prisoner,
        fixture.list_items()?,
        query,
        config,
    )?;
    let staff_names =
        resolve_names(fixture, view.groups.items().map(|row| &row.item), config).await;

    Ok(Report { view, staff_names })
}

/// Builds the report for one non-association.
///
/// # Errors
///
/// Returns an error if a record is malformed, or there is no such
/// non-association the user may view.
pub async fn build_detail(
    fixture: &Fixture,
    id: i64,
    config: &EngineConfig,
) -> Result<DetailReport, ApiError> {
    let permissions = fixture.user.permissions(&config.roles);
    let row = build_detail_view(
        &permissions,
        &fixture.prisoner,
        fixture.list_items()?,
        id,
        config,
    )?;
    let staff_names = resolve_names(fixture, [&row.item], config).await;

    Ok(DetailReport { row, staff_names })
}

/// Closes a non-association as the fixture's user.
///
/// # Errors
///
/// Returns an error if there is no such non-association the user may
/// modify, it is already closed, or the reason is invalid.
pub fn close(
    fixture: &Fixture,
    id: i64,
    reason: &str,
    closed_at: OffsetDateTime,
    config: &EngineConfig,
) -> Result<NonAssociation, ApiError> {
    let Some((record, counterpart)) = fixture.record(id) else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Non-association"),
            message: format!("No non-association {id}"),
        });
    };

    close_non_association(
        &fixture.user.permissions(&config.roles),
        &fixture.prisoner,
        counterpart,
        record,
        CloseRequest {
            closed_by: fixture.user.username.clone(),
            closed_reason: reason.to_string(),
            closed_at,
        },
        config,
    )
}

async fn resolve_names<'a, I>(
    fixture: &Fixture,
    items: I,
    config: &EngineConfig,
) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a NonAssociationListItem> + Send,
{
    let directory = FixtureStaffDirectory::new(&fixture.staff);
    resolve_staff_names(&directory, collect_staff_usernames(items), config).await
}
