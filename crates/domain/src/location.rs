// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Prisoner location classification.
//!
//! A prisoner is in exactly one of four places:
//!
//! - an establishment (a genuine establishment id)
//! - being transferred (the transfer sentinel id)
//! - outside, i.e. released (the outside sentinel id)
//! - unknown (no establishment id at all)

use serde::Serialize;

use crate::config::LocationSentinels;
use crate::types::{OtherPrisonerDetails, Prisoner};

/// Text shown when no better location is available.
const NOT_KNOWN: &str = "Not known";

/// The location fields shared by every prisoner shape the services return.
pub trait PrisonerLocationFields {
    /// Establishment id, or a sentinel.
    fn prison_id(&self) -> Option<&str>;
    /// Establishment name.
    fn prison_name(&self) -> Option<&str>;
    /// Cell location within the establishment.
    fn cell_location(&self) -> Option<&str>;
    /// Free-text location used while in transfer or outside.
    fn location_description(&self) -> Option<&str>;
}

impl PrisonerLocationFields for Prisoner {
    fn prison_id(&self) -> Option<&str> {
        self.prison_id.as_deref()
    }

    fn prison_name(&self) -> Option<&str> {
        self.prison_name.as_deref()
    }

    fn cell_location(&self) -> Option<&str> {
        self.cell_location.as_deref()
    }

    fn location_description(&self) -> Option<&str> {
        self.location_description.as_deref()
    }
}

impl PrisonerLocationFields for OtherPrisonerDetails {
    fn prison_id(&self) -> Option<&str> {
        self.prison_id.as_deref()
    }

    fn prison_name(&self) -> Option<&str> {
        self.prison_name.as_deref()
    }

    fn cell_location(&self) -> Option<&str> {
        self.cell_location.as_deref()
    }

    fn location_description(&self) -> Option<&str> {
        None
    }
}

/// Where a prisoner currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Location {
    /// Placed in an establishment.
    #[serde(rename_all = "camelCase")]
    InEstablishment {
        /// Establishment id.
        establishment_id: String,
        /// Establishment name, empty if the service did not supply one.
        establishment_name: String,
        /// Cell location, if known.
        cell_location: Option<String>,
    },
    /// Being moved between establishments.
    #[serde(rename_all = "camelCase")]
    BeingTransferred {
        /// Free-text location, if known.
        location_description: Option<String>,
    },
    /// Released or otherwise outside any establishment.
    #[serde(rename_all = "camelCase")]
    Outside {
        /// Free-text location, if known.
        location_description: Option<String>,
    },
    /// No establishment id was supplied.
    UnknownLocation,
}

impl Location {
    /// Returns the establishment id if placed in an establishment.
    #[must_use]
    pub fn establishment_id(&self) -> Option<&str> {
        match self {
            Self::InEstablishment {
                establishment_id, ..
            } => Some(establishment_id),
            _ => None,
        }
    }

    /// Returns true if placed in an establishment.
    #[must_use]
    pub const fn is_in_establishment(&self) -> bool {
        matches!(self, Self::InEstablishment { .. })
    }

    /// Returns the location text shown to staff.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::InEstablishment { cell_location, .. } => {
                cell_location.as_deref().unwrap_or(NOT_KNOWN)
            }
            Self::BeingTransferred {
                location_description,
            } => location_description.as_deref().unwrap_or("Transfer"),
            Self::Outside {
                location_description,
            } => location_description.as_deref().unwrap_or("Outside"),
            Self::UnknownLocation => NOT_KNOWN,
        }
    }
}

/// Classifies a prisoner's location from its establishment id.
///
/// This is total: a missing or empty id that matches neither sentinel is
/// `Location::UnknownLocation`.
#[must_use]
pub fn classify<P: PrisonerLocationFields + ?Sized>(
    prisoner: &P,
    sentinels: &LocationSentinels,
) -> Location {
    let description = || prisoner.location_description().map(str::to_string);

    match prisoner.prison_id() {
        Some(id) if id == sentinels.transfer => Location::BeingTransferred {
            location_description: description(),
        },
        Some(id) if id == sentinels.outside => Location::Outside {
            location_description: description(),
        },
        Some(id) if !id.is_empty() => Location::InEstablishment {
            establishment_id: id.to_string(),
            establishment_name: prisoner.prison_name().unwrap_or_default().to_string(),
            cell_location: prisoner.cell_location().map(str::to_string),
        },
        _ => Location::UnknownLocation,
    }
}
