//! Movies and their pricing categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// Pricing category a movie rents under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieCategory {
    /// Catalog titles: flat base for two days, then per extra day
    Regular,
    /// Recent releases: charged per day, earn bonus points
    NewRelease,
    /// Children's titles: flat base for three days, then per extra day
    Childrens,
}

impl MovieCategory {
    /// Every category, in declaration order
    pub const ALL: [MovieCategory; 3] = [
        MovieCategory::Regular,
        MovieCategory::NewRelease,
        MovieCategory::Childrens,
    ];

    /// Stable label used in configuration and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieCategory::Regular => "regular",
            MovieCategory::NewRelease => "new_release",
            MovieCategory::Childrens => "childrens",
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieCategory {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(MovieCategory::Regular),
            "new_release" | "new-release" => Ok(MovieCategory::NewRelease),
            "childrens" | "children" => Ok(MovieCategory::Childrens),
            other => Err(RentalError::UnknownCategory(other.to_string())),
        }
    }
}

/// A title in the catalog
///
/// Movies are shared between rentals through `Arc<Movie>`; a rental never
/// owns or mutates the movie it points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Movie {
    title: String,
    category: MovieCategory,
}

impl Movie {
    /// Create a movie, rejecting blank titles
    pub fn new(title: impl Into<String>, category: MovieCategory) -> Result<Self, RentalError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RentalError::EmptyTitle);
        }
        Ok(Self { title, category })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> MovieCategory {
        self.category
    }
}
