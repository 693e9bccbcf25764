//! Closed name sets for table configs and table views
//!
//! The serde representation is the exact variant string, so any name outside
//! the set fails request deserialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Names a table config may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableConfigName {
    FarmingPracticeConfig,
}

impl TableConfigName {
    /// Every accepted name.
    pub const ALL: [Self; 1] = [Self::FarmingPracticeConfig];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FarmingPracticeConfig => "FarmingPracticeConfig",
        }
    }
}

impl FromStr for TableConfigName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "table config name",
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for TableConfigName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names a table view may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableViewName {
    FarmingPracticeTypicalView,
    FarmingPracticeOfferingView,
}

impl TableViewName {
    /// Every accepted name.
    pub const ALL: [Self; 2] = [
        Self::FarmingPracticeTypicalView,
        Self::FarmingPracticeOfferingView,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FarmingPracticeTypicalView => "FarmingPracticeTypicalView",
            Self::FarmingPracticeOfferingView => "FarmingPracticeOfferingView",
        }
    }
}

impl FromStr for TableViewName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "table view name",
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for TableViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_variant_string() {
        let json = serde_json::to_string(&TableConfigName::FarmingPracticeConfig).unwrap();
        assert_eq!(json, r#""FarmingPracticeConfig""#);

        let name: TableViewName = serde_json::from_str(r#""FarmingPracticeOfferingView""#).unwrap();
        assert_eq!(name, TableViewName::FarmingPracticeOfferingView);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(serde_json::from_str::<TableConfigName>(r#""SoilSampleConfig""#).is_err());
        assert!(serde_json::from_str::<TableViewName>(r#""farmingpracticetypicalview""#).is_err());

        let err = "SoilSampleConfig".parse::<TableConfigName>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVariant { .. }));
    }

    #[test]
    fn from_str_matches_as_str() {
        for name in TableConfigName::ALL {
            assert_eq!(name.as_str().parse::<TableConfigName>().unwrap(), name);
        }
        for name in TableViewName::ALL {
            assert_eq!(name.to_string().parse::<TableViewName>().unwrap(), name);
        }
    }
}
