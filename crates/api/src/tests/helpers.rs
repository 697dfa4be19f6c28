// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::Duration;
use time::macros::datetime;

use nonassoc_domain::{
    EngineConfig, Location, NonAssociation, NonAssociationListItem, OtherPrisonerDetails,
    Prisoner, PrisonerRole, Reason, RestrictionType, UserPermissions, classify,
};

use crate::AuthenticatedUser;

pub const PRISON: &str = "ROLE_PRISON";
pub const WRITE: &str = "ROLE_NON_ASSOCIATIONS";
pub const GLOBAL: &str = "ROLE_GLOBAL_SEARCH";
pub const INACTIVE: &str = "ROLE_INACTIVE_BOOKINGS";

pub fn create_test_user(roles: &[&str]) -> AuthenticatedUser {
    AuthenticatedUser::new(
        String::from("cde87s"),
        roles.iter().map(|role| (*role).to_string()).collect(),
        vec![String::from("MDI")],
    )
}

pub fn permissions(roles: &[&str]) -> UserPermissions {
    create_test_user(roles).permissions(&EngineConfig::default().roles)
}

pub fn create_test_prisoner(prison_id: Option<&str>) -> Prisoner {
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

pub fn location(prison_id: Option<&str>) -> Location {
    classify(
        &create_test_prisoner(prison_id),
        &EngineConfig::default().sentinels,
    )
}

pub fn create_test_item(
    id: i64,
    last_name: &str,
    prison_id: Option<&str>,
    is_closed: bool,
) -> NonAssociationListItem {
    let created = datetime!(2023-07-01 09:00 UTC) + Duration::hours(id);
    NonAssociationListItem {
        id,
        role: PrisonerRole::Victim,
        reason: Reason::Threat,
        restriction_type: RestrictionType::Wing,
        comment: String::from("Threats made on exercise yard"),
        authorised_by: String::from("cde87s"),
        updated_by: String::from("NON_ASSOCIATIONS_SYSTEM"),
        is_closed,
        closed_by: is_closed.then(|| String::from("abc12a")),
        closed_reason: is_closed.then(|| String::from("No longer needed")),
        closed_at: is_closed.then(|| created + Duration::days(3)),
        when_created: created,
        when_updated: created + Duration::days(1),
        other_prisoner_details: OtherPrisonerDetails {
            prisoner_number: format!("B{id:04}CD"),
            role: PrisonerRole::Perpetrator,
            first_name: String::from("FRED"),
            last_name: String::from(last_name),
            prison_id: prison_id.map(String::from),
            prison_name: prison_id.map(|id| format!("{id} (HMP)")),
            cell_location: prison_id.map(|_| String::from("2-1-005")),
        },
    }
}

pub fn create_test_counterpart(prisoner_number: &str, prison_id: Option<&str>) -> Prisoner {
    Prisoner {
        prisoner_number: String::from(prisoner_number),
        first_name: String::from("FRED"),
        last_name: String::from("MILLS"),
        prison_id: prison_id.map(String::from),
        prison_name: prison_id.map(|id| format!("{id} (HMP)")),
        cell_location: prison_id.map(|_| String::from("2-1-005")),
        location_description: None,
    }
}

/// A record with the test prisoner on the second side.
pub fn create_test_record(id: i64, other_prisoner_number: &str) -> NonAssociation {
    let created = datetime!(2023-07-01 09:00 UTC) + Duration::hours(id);
    NonAssociation {
        id,
        first_prisoner_number: String::from(other_prisoner_number),
        first_prisoner_role: PrisonerRole::Perpetrator,
        second_prisoner_number: String::from("A1234BC"),
        second_prisoner_role: PrisonerRole::Victim,
        reason: Reason::Violence,
        restriction_type: RestrictionType::Landing,
        comment: String::from("Fight on the landing"),
        authorised_by: String::from("cde87s"),
        updated_by: String::from("cde87s"),
        is_closed: false,
        closed_by: None,
        closed_reason: None,
        closed_at: None,
        when_created: created,
        when_updated: created,
    }
}
