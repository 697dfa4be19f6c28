// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while applying non-association rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The sort field is not one of the enumerated sort keys.
    InvalidSortBy(String),
    /// The sort direction is neither ascending nor descending.
    InvalidSortDirection(String),
    /// The comment is empty or too long.
    InvalidComment(String),
    /// Closure fields disagree with the closed flag.
    ClosureFieldsInconsistent {
        /// The non-association identifier.
        id: i64,
        /// Whether the record claims to be closed.
        is_closed: bool,
    },
    /// The non-association is already closed.
    AlreadyClosed(i64),
    /// Both sides of a non-association are the same prisoner.
    SamePrisoner(String),
    /// The prisoner is not one of the two parties to a non-association.
    PrisonerNotParty {
        /// The non-association identifier.
        id: i64,
        /// The prisoner number that was requested.
        prisoner_number: String,
    },
    /// The engine configuration could not be read.
    InvalidConfig(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSortBy(value) => write!(f, "Invalid sort field: '{value}'"),
            Self::InvalidSortDirection(value) => {
                write!(f, "Invalid sort direction: '{value}'")
            }
            Self::InvalidComment(msg) => write!(f, "Invalid comment: {msg}"),
            Self::ClosureFieldsInconsistent { id, is_closed } => {
                if *is_closed {
                    write!(
                        f,
                        "Non-association {id} is closed but is missing closure details"
                    )
                } else {
                    write!(f, "Non-association {id} is open but has closure details")
                }
            }
            Self::AlreadyClosed(id) => write!(f, "Non-association {id} is already closed"),
            Self::SamePrisoner(prisoner_number) => {
                write!(
                    f,
                    "Prisoner {prisoner_number} cannot be non-associated with themselves"
                )
            }
            Self::PrisonerNotParty {
                id,
                prisoner_number,
            } => {
                write!(
                    f,
                    "Prisoner {prisoner_number} is not part of non-association {id}"
                )
            }
            Self::InvalidConfig(msg) => write!(f, "Invalid engine configuration: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
