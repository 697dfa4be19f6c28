// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, Capability, authorize_modify_non_association, authorize_view_non_association,
    compute_non_association_capabilities, compute_prisoner_capabilities,
};

use super::helpers::{GLOBAL, INACTIVE, PRISON, WRITE, location, permissions};

#[test]
fn test_capability_from_bool() {
    assert_eq!(Capability::from_bool(true), Capability::Allowed);
    assert_eq!(Capability::from_bool(false), Capability::Denied);
    assert!(Capability::Allowed.is_allowed());
    assert!(!Capability::Denied.is_allowed());
}

#[test]
fn test_capability_serializes_as_bool() {
    assert_eq!(
        serde_json::to_string(&Capability::Allowed).unwrap(),
        "true"
    );
    assert_eq!(
        serde_json::from_str::<Capability>("false").unwrap(),
        Capability::Denied
    );
}

#[test]
fn test_prisoner_capabilities() {
    let perms = permissions(&[PRISON, GLOBAL]);

    assert!(
        compute_prisoner_capabilities(&perms, &location(Some("MDI")))
            .can_view_profile
            .is_allowed()
    );
    assert!(
        compute_prisoner_capabilities(&perms, &location(Some("TRN")))
            .can_view_profile
            .is_allowed()
    );
    assert!(
        !compute_prisoner_capabilities(&perms, &location(Some("OUT")))
            .can_view_profile
            .is_allowed()
    );
    assert!(
        !compute_prisoner_capabilities(&perms, &location(Some("LEI")))
            .can_view_profile
            .is_allowed()
    );
}

#[test]
fn test_writer_in_caseload_has_all_capabilities() {
    let perms = permissions(&[PRISON, WRITE]);

    let caps =
        compute_non_association_capabilities(&perms, &location(Some("MDI")), &location(Some("LEI")));

    assert!(caps.can_view.is_allowed());
    assert!(caps.can_add.is_allowed());
    assert!(caps.can_update.is_allowed());
    assert!(caps.can_close.is_allowed());
}

#[test]
fn test_reader_can_only_view() {
    let perms = permissions(&[PRISON, GLOBAL, INACTIVE]);

    let caps =
        compute_non_association_capabilities(&perms, &location(Some("MDI")), &location(Some("TRN")));

    assert!(caps.can_view.is_allowed());
    assert!(!caps.can_add.is_allowed());
    assert!(!caps.can_update.is_allowed());
    assert!(!caps.can_close.is_allowed());
}

#[test]
fn test_writer_outside_caseload_can_only_view() {
    let perms = permissions(&[PRISON, WRITE]);

    let caps =
        compute_non_association_capabilities(&perms, &location(Some("LEI")), &location(Some("TRN")));

    assert!(caps.can_view.is_allowed());
    assert!(!caps.can_update.is_allowed());
}

#[test]
fn test_authorize_modify_reports_not_found() {
    let perms = permissions(&[PRISON, WRITE]);

    assert_eq!(
        authorize_modify_non_association(&perms, &location(Some("MDI")), &location(Some("TRN"))),
        Ok(())
    );
    assert!(matches!(
        authorize_modify_non_association(&perms, &location(Some("LEI")), &location(Some("TRN"))),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_authorize_view_requires_prison_role() {
    let reader = permissions(&[PRISON]);
    let nobody = permissions(&[WRITE]);

    assert_eq!(
        authorize_view_non_association(&reader, &location(Some("LEI")), &location(None)),
        Ok(())
    );
    assert!(matches!(
        authorize_view_non_association(&nobody, &location(Some("MDI")), &location(Some("MDI"))),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
