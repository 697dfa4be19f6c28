// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List query parameters.
//!
//! Sort keys and directions are validated here, before any list reaches
//! the sort engine.

use std::str::FromStr;

use nonassoc_domain::{SortBy, SortDirection};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Which non-associations a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListTab {
    /// Open non-associations.
    #[default]
    Open,
    /// Closed non-associations.
    Closed,
}

impl ListTab {
    /// Returns the query-string code for this tab.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns true if a non-association with the given closed flag belongs
    /// on this tab.
    #[must_use]
    pub const fn includes(&self, is_closed: bool) -> bool {
        match self {
            Self::Open => !is_closed,
            Self::Closed => is_closed,
        }
    }
}

impl FromStr for ListTab {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ApiError::InvalidInput {
                field: String::from("tab"),
                message: format!("Unknown tab '{s}'"),
            }),
        }
    }
}

/// Validated list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Which tab to show.
    pub tab: ListTab,
    /// Field to order by.
    pub sort: SortBy,
    /// Direction to order in.
    pub order: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            tab: ListTab::Open,
            sort: SortBy::WhenCreated,
            order: SortDirection::Descending,
        }
    }
}

impl ListQuery {
    /// Parses a list query from query-string pairs.
    ///
    /// Recognised keys are `tab`, `sort` and `order`; other keys are
    /// ignored. A missing key takes its default. When a key repeats, the
    /// last value wins.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming the first invalid field.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "tab" => query.tab = value.parse()?,
                "sort" => query.sort = value.parse()?,
                "order" => query.order = value.parse()?,
                _ => {}
            }
        }
        Ok(query)
    }
}
