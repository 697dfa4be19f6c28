// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures.

use time::Duration;
use time::macros::datetime;

use crate::{
    EngineConfig, Location, LocationSentinels, NonAssociation, NonAssociationListItem,
    OtherPrisonerDetails, Prisoner, PrisonerRole, Reason, RestrictionType, UserPermissions,
    classify,
};

pub fn sentinels() -> LocationSentinels {
    LocationSentinels::default()
}

pub fn prisoner_at(prison_id: Option<&str>) -> Prisoner {
    Prisoner {
        prisoner_number: String::from("A1234BC"),
        first_name: String::from("DAVID"),
        last_name: String::from("JONES"),
        prison_id: prison_id.map(String::from),
        prison_name: prison_id.map(|id| format!("{id} (HMP)")),
        cell_location: Some(String::from("1-1-001")),
        location_description: None,
    }
}

pub fn location_at(prison_id: Option<&str>) -> Location {
    classify(&prisoner_at(prison_id), &sentinels())
}

/// The five locations used by the truth-table tests, in order:
/// in-caseload establishment, out-of-caseload establishment, transfer,
/// outside, unknown.
pub fn matrix_locations() -> [Location; 5] {
    [
        location_at(Some("MDI")),
        location_at(Some("LEI")),
        location_at(Some("TRN")),
        location_at(Some("OUT")),
        location_at(None),
    ]
}

pub fn user(roles: &[&str]) -> UserPermissions {
    UserPermissions::from_roles(roles, ["MDI"], &EngineConfig::default().roles)
}

pub fn other_prisoner(
    prisoner_number: &str,
    first_name: &str,
    last_name: &str,
    prison_id: Option<&str>,
) -> OtherPrisonerDetails {
    OtherPrisonerDetails {
        prisoner_number: String::from(prisoner_number),
        role: PrisonerRole::Victim,
        first_name: String::from(first_name),
        last_name: String::from(last_name),
        prison_id: prison_id.map(String::from),
        prison_name: prison_id.map(|id| format!("{id} (HMP)")),
        cell_location: prison_id.map(|_| String::from("1-1-001")),
    }
}

pub fn list_item(id: i64, other: OtherPrisonerDetails) -> NonAssociationListItem {
    let created = datetime!(2023-07-01 09:00 UTC) + Duration::hours(id);
    NonAssociationListItem {
        id,
        role: PrisonerRole::Perpetrator,
        reason: Reason::Bullying,
        restriction_type: RestrictionType::Cell,
        comment: String::from("See IR 12133111"),
        authorised_by: String::from("cde87s"),
        updated_by: String::from("cde87s"),
        is_closed: false,
        closed_by: None,
        closed_reason: None,
        closed_at: None,
        when_created: created,
        when_updated: created + Duration::days(1),
        other_prisoner_details: other,
    }
}

pub fn item_at(id: i64, prison_id: Option<&str>) -> NonAssociationListItem {
    list_item(
        id,
        other_prisoner(&format!("B{id:04}CD"), "FRED", "MILLS", prison_id),
    )
}

pub fn non_association() -> NonAssociation {
    NonAssociation {
        id: 101,
        first_prisoner_number: String::from("A1234BC"),
        first_prisoner_role: PrisonerRole::Victim,
        second_prisoner_number: String::from("A1235EF"),
        second_prisoner_role: PrisonerRole::Perpetrator,
        reason: Reason::Violence,
        restriction_type: RestrictionType::Landing,
        comment: String::from("Keep apart after fight on wing"),
        authorised_by: String::from("cde87s"),
        updated_by: String::from("cde87s"),
        is_closed: false,
        closed_by: None,
        closed_reason: None,
        closed_at: None,
        when_created: datetime!(2023-07-03 11:00 UTC),
        when_updated: datetime!(2023-07-04 15:30 UTC),
    }
}

pub fn closed(mut non_association: NonAssociation) -> NonAssociation {
    non_association.is_closed = true;
    non_association.closed_by = Some(String::from("abc12a"));
    non_association.closed_reason = Some(String::from("Problem solved"));
    non_association.closed_at = Some(datetime!(2023-07-05 10:00 UTC));
    non_association
}
