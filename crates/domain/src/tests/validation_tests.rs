// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{
    DEFAULT_MAX_COMMENT_LENGTH, DomainError, EngineConfig, validate_closure_fields,
    validate_comment, validate_distinct_prisoners, validate_non_association,
};

use super::helpers::{closed, item_at, non_association};

#[test]
fn test_open_non_association_without_closure_fields_is_valid() {
    assert_eq!(validate_closure_fields(&non_association()), Ok(()));
}

#[test]
fn test_closed_non_association_with_all_closure_fields_is_valid() {
    assert_eq!(validate_closure_fields(&closed(non_association())), Ok(()));
}

#[test]
fn test_open_non_association_with_closure_fields_is_invalid() {
    let mut record = non_association();
    record.closed_at = Some(datetime!(2023-07-05 10:00 UTC));

    assert_eq!(
        validate_closure_fields(&record),
        Err(DomainError::ClosureFieldsInconsistent {
            id: 101,
            is_closed: false
        })
    );
}

#[test]
fn test_closed_non_association_missing_any_closure_field_is_invalid() {
    for field in 0..3 {
        let mut record = closed(non_association());
        match field {
            0 => record.closed_by = None,
            1 => record.closed_reason = None,
            _ => record.closed_at = None,
        }

        assert_eq!(
            validate_closure_fields(&record),
            Err(DomainError::ClosureFieldsInconsistent {
                id: 101,
                is_closed: true
            }),
            "field {field}"
        );
    }
}

#[test]
fn test_comment_length_limit() {
    let at_limit = "x".repeat(DEFAULT_MAX_COMMENT_LENGTH);
    let over_limit = "x".repeat(DEFAULT_MAX_COMMENT_LENGTH + 1);

    assert_eq!(validate_comment(&at_limit, DEFAULT_MAX_COMMENT_LENGTH), Ok(()));
    assert_eq!(
        validate_comment(&over_limit, DEFAULT_MAX_COMMENT_LENGTH),
        Err(DomainError::InvalidComment(String::from(
            "Comment must be 240 characters or less, but is 241"
        )))
    );
}

#[test]
fn test_comment_length_counts_characters_not_bytes() {
    let accented = "é".repeat(DEFAULT_MAX_COMMENT_LENGTH);

    assert_eq!(validate_comment(&accented, DEFAULT_MAX_COMMENT_LENGTH), Ok(()));
}

#[test]
fn test_blank_comment_is_invalid() {
    assert!(matches!(
        validate_comment("   ", DEFAULT_MAX_COMMENT_LENGTH),
        Err(DomainError::InvalidComment(_))
    ));
}

#[test]
fn test_prisoner_cannot_be_non_associated_with_themselves() {
    assert_eq!(validate_distinct_prisoners("A1234BC", "A1235EF"), Ok(()));
    assert_eq!(
        validate_distinct_prisoners("a1234bc", "A1234BC"),
        Err(DomainError::SamePrisoner(String::from("A1234BC")))
    );
}

#[test]
fn test_validate_non_association_applies_every_rule() {
    let config = EngineConfig::default();
    assert_eq!(validate_non_association(&non_association(), &config), Ok(()));

    let mut same = non_association();
    same.second_prisoner_number = same.first_prisoner_number.clone();
    assert!(matches!(
        validate_non_association(&same, &config),
        Err(DomainError::SamePrisoner(_))
    ));

    let short_limit = EngineConfig {
        max_comment_length: 10,
        ..EngineConfig::default()
    };
    assert!(matches!(
        validate_non_association(&non_association(), &short_limit),
        Err(DomainError::InvalidComment(_))
    ));

    let mut half_closed = non_association();
    half_closed.is_closed = true;
    assert!(matches!(
        validate_non_association(&half_closed, &config),
        Err(DomainError::ClosureFieldsInconsistent { .. })
    ));
}

#[test]
fn test_list_item_closure_fields_are_checked() {
    let mut item = item_at(7, Some("MDI"));
    assert_eq!(validate_closure_fields(&item), Ok(()));

    item.closed_at = Some(datetime!(2023-07-05 10:00 UTC));
    assert_eq!(
        validate_closure_fields(&item),
        Err(DomainError::ClosureFieldsInconsistent {
            id: 7,
            is_closed: false
        })
    );

    item.is_closed = true;
    item.closed_by = Some(String::from("abc12a"));
    item.closed_reason = Some(String::from("Problem solved"));
    assert_eq!(validate_closure_fields(&item), Ok(()));
}
