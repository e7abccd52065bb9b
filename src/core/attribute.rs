use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;

/// One of the eight tracked fencing-participation metrics.
///
/// Serialized form and display form are the exact column headers of the
/// tabular source.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Attribute {
    #[default]
    #[serde(rename = "State Population in 2017")]
    StatePopulation,
    #[serde(rename = "Number of USFA Sanctioned Clubs")]
    ClubCount,
    #[serde(rename = "USFA Clubs Per Capita")]
    ClubsPerCapita,
    #[serde(rename = "Number of Active USFA Members")]
    MemberCount,
    #[serde(rename = "USFA Members Per Capita")]
    MembersPerCapita,
    #[serde(rename = "Number of 2017 Tournaments")]
    TournamentCount,
    #[serde(rename = "Rio 2016 Olympians")]
    RioOlympians,
    #[serde(rename = "London 2012 Olympians")]
    LondonOlympians,
}

impl Attribute {
    /// Dropdown order.
    pub const ALL: [Attribute; 8] = [
        Attribute::StatePopulation,
        Attribute::ClubCount,
        Attribute::ClubsPerCapita,
        Attribute::MemberCount,
        Attribute::MembersPerCapita,
        Attribute::TournamentCount,
        Attribute::RioOlympians,
        Attribute::LondonOlympians,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StatePopulation => "State Population in 2017",
            Self::ClubCount => "Number of USFA Sanctioned Clubs",
            Self::ClubsPerCapita => "USFA Clubs Per Capita",
            Self::MemberCount => "Number of Active USFA Members",
            Self::MembersPerCapita => "USFA Members Per Capita",
            Self::TournamentCount => "Number of 2017 Tournaments",
            Self::RioOlympians => "Rio 2016 Olympians",
            Self::LondonOlympians => "London 2012 Olympians",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.label() == label)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| AtlasError::UnknownAttribute(s.to_owned()))
    }
}
