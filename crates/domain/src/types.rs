// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A prisoner's role in a non-association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrisonerRole {
    /// The prisoner is the victim.
    Victim,
    /// The prisoner is the perpetrator.
    Perpetrator,
    /// The prisoner's role is not relevant.
    NotRelevant,
    /// The prisoner's role is not known.
    Unknown,
}

impl PrisonerRole {
    /// Returns the wire code for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Victim => "VICTIM",
            Self::Perpetrator => "PERPETRATOR",
            Self::NotRelevant => "NOT_RELEVANT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns the text shown to staff for this role.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Victim => "Victim",
            Self::Perpetrator => "Perpetrator",
            Self::NotRelevant => "Not relevant",
            Self::Unknown => "Not known",
        }
    }
}

/// The reason two prisoners must be kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// Bullying.
    Bullying,
    /// Gang related.
    GangRelated,
    /// Organised crime.
    OrganisedCrime,
    /// Police or legal request.
    LegalRequest,
    /// Threat.
    Threat,
    /// Violence.
    Violence,
    /// Other.
    Other,
}

impl Reason {
    /// Returns the wire code for this reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bullying => "BULLYING",
            Self::GangRelated => "GANG_RELATED",
            Self::OrganisedCrime => "ORGANISED_CRIME",
            Self::LegalRequest => "LEGAL_REQUEST",
            Self::Threat => "THREAT",
            Self::Violence => "VIOLENCE",
            Self::Other => "OTHER",
        }
    }

    /// Returns the text shown to staff for this reason.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Bullying => "Bullying",
            Self::GangRelated => "Gang related",
            Self::OrganisedCrime => "Organised crime",
            Self::LegalRequest => "Police or legal request",
            Self::Threat => "Threat",
            Self::Violence => "Violence",
            Self::Other => "Other",
        }
    }
}

/// Where the two prisoners must be kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestrictionType {
    /// Not in the same cell.
    Cell,
    /// Not in the same cell or on the same landing.
    Landing,
    /// Not in the same cell, landing or wing.
    Wing,
}

impl RestrictionType {
    /// Returns the wire code for this restriction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cell => "CELL",
            Self::Landing => "LANDING",
            Self::Wing => "WING",
        }
    }

    /// Returns the text shown to staff for this restriction.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Cell => "Cell only",
            Self::Landing => "Cell and landing",
            Self::Wing => "Cell, landing and wing",
        }
    }
}

/// A prisoner as returned by the prisoner search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prisoner {
    /// The prisoner number, e.g. `A1234BC`.
    pub prisoner_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Establishment id, or a sentinel for transfer / outside.
    #[serde(default)]
    pub prison_id: Option<String>,
    /// Establishment name.
    #[serde(default)]
    pub prison_name: Option<String>,
    /// Cell location within the establishment.
    #[serde(default)]
    pub cell_location: Option<String>,
    /// Free-text location used while in transfer or outside.
    #[serde(default)]
    pub location_description: Option<String>,
}

/// The counterpart prisoner embedded in a non-association list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherPrisonerDetails {
    /// The counterpart's prisoner number.
    pub prisoner_number: String,
    /// The counterpart's role in the non-association.
    pub role: PrisonerRole,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Establishment id, or a sentinel for transfer / outside.
    #[serde(default)]
    pub prison_id: Option<String>,
    /// Establishment name.
    #[serde(default)]
    pub prison_name: Option<String>,
    /// Cell location within the establishment.
    #[serde(default)]
    pub cell_location: Option<String>,
}

impl OtherPrisonerDetails {
    /// Builds counterpart details from a prisoner search record.
    ///
    /// The role is a placeholder until the record is projected with
    /// [`NonAssociation::list_item_for`].
    #[must_use]
    pub fn from_prisoner(prisoner: &Prisoner) -> Self {
        Self {
            prisoner_number: prisoner.prisoner_number.clone(),
            role: PrisonerRole::Unknown,
            first_name: prisoner.first_name.clone(),
            last_name: prisoner.last_name.clone(),
            prison_id: prisoner.prison_id.clone(),
            prison_name: prisoner.prison_name.clone(),
            cell_location: prisoner.cell_location.clone(),
        }
    }

    /// Counterpart details for a prisoner the search service did not return.
    #[must_use]
    pub fn unlocated(prisoner_number: &str) -> Self {
        Self {
            prisoner_number: prisoner_number.to_string(),
            role: PrisonerRole::Unknown,
            first_name: String::new(),
            last_name: String::new(),
            prison_id: None,
            prison_name: None,
            cell_location: None,
        }
    }
}

/// A non-association between two prisoners.
///
/// The record is symmetric; neither prisoner is privileged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonAssociation {
    /// Identifier assigned by the non-associations service.
    pub id: i64,
    /// First prisoner number.
    pub first_prisoner_number: String,
    /// First prisoner's role.
    pub first_prisoner_role: PrisonerRole,
    /// Second prisoner number.
    pub second_prisoner_number: String,
    /// Second prisoner's role.
    pub second_prisoner_role: PrisonerRole,
    /// Reason for the non-association.
    pub reason: Reason,
    /// Where the prisoners must be kept apart.
    pub restriction_type: RestrictionType,
    /// Free-text comment.
    pub comment: String,
    /// Staff username of whoever authorised it, or the system username.
    pub authorised_by: String,
    /// Staff username of the last update, or the system username.
    pub updated_by: String,
    /// Whether the non-association is closed.
    pub is_closed: bool,
    /// Staff username of whoever closed it.
    #[serde(default)]
    pub closed_by: Option<String>,
    /// Reason given for closing it.
    #[serde(default)]
    pub closed_reason: Option<String>,
    /// When it was closed.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub closed_at: Option<OffsetDateTime>,
    /// When it was created.
    #[serde(with = "time::serde::rfc3339")]
    pub when_created: OffsetDateTime,
    /// When it was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub when_updated: OffsetDateTime,
}

impl NonAssociation {
    /// Returns the other party's prisoner number, or `None` if
    /// `prisoner_number` is neither party.
    #[must_use]
    pub fn other_prisoner_number(&self, prisoner_number: &str) -> Option<&str> {
        if self.first_prisoner_number == prisoner_number {
            Some(&self.second_prisoner_number)
        } else if self.second_prisoner_number == prisoner_number {
            Some(&self.first_prisoner_number)
        } else {
            None
        }
    }

    /// Projects this record into the perspective of one of its parties.
    ///
    /// `other` describes the counterpart prisoner; its `role` is replaced
    /// with the role recorded on this non-association.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PrisonerNotParty` if `key_prisoner_number` is
    /// neither party.
    pub fn list_item_for(
        &self,
        key_prisoner_number: &str,
        mut other: OtherPrisonerDetails,
    ) -> Result<NonAssociationListItem, DomainError> {
        let (role, other_role) = if self.first_prisoner_number == key_prisoner_number {
            (self.first_prisoner_role, self.second_prisoner_role)
        } else if self.second_prisoner_number == key_prisoner_number {
            (self.second_prisoner_role, self.first_prisoner_role)
        } else {
            return Err(DomainError::PrisonerNotParty {
                id: self.id,
                prisoner_number: key_prisoner_number.to_string(),
            });
        };
        other.role = other_role;

        Ok(NonAssociationListItem {
            id: self.id,
            role,
            reason: self.reason,
            restriction_type: self.restriction_type,
            comment: self.comment.clone(),
            authorised_by: self.authorised_by.clone(),
            updated_by: self.updated_by.clone(),
            is_closed: self.is_closed,
            closed_by: self.closed_by.clone(),
            closed_reason: self.closed_reason.clone(),
            closed_at: self.closed_at,
            when_created: self.when_created,
            when_updated: self.when_updated,
            other_prisoner_details: other,
        })
    }
}

/// A non-association seen from one key prisoner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonAssociationListItem {
    /// Identifier assigned by the non-associations service.
    pub id: i64,
    /// The key prisoner's role.
    pub role: PrisonerRole,
    /// Reason for the non-association.
    pub reason: Reason,
    /// Where the prisoners must be kept apart.
    pub restriction_type: RestrictionType,
    /// Free-text comment.
    pub comment: String,
    /// Staff username of whoever authorised it.
    pub authorised_by: String,
    /// Staff username of the last update.
    pub updated_by: String,
    /// Whether the non-association is closed.
    pub is_closed: bool,
    /// Staff username of whoever closed it.
    #[serde(default)]
    pub closed_by: Option<String>,
    /// Reason given for closing it.
    #[serde(default)]
    pub closed_reason: Option<String>,
    /// When it was closed.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub closed_at: Option<OffsetDateTime>,
    /// When it was created.
    #[serde(with = "time::serde::rfc3339")]
    pub when_created: OffsetDateTime,
    /// When it was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub when_updated: OffsetDateTime,
    /// The counterpart prisoner.
    pub other_prisoner_details: OtherPrisonerDetails,
}
