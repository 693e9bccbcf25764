//! TableConfig entity - a named column schema for a class of rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, JsonObject, TableConfigName};

/// Stored table config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub name: TableConfigName,
    /// Column schema, e.g. `{"columns": {"year": {"type": "int"}}}`
    pub config_fields: JsonObject,
}

/// Create table config request
#[derive(Debug, Clone, Deserialize)]
pub struct NewTableConfig {
    pub name: TableConfigName,
    #[serde(default)]
    pub config_fields: JsonObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_fields_default_to_empty() {
        let new: NewTableConfig =
            serde_json::from_str(r#"{"name": "FarmingPracticeConfig"}"#).unwrap();
        assert_eq!(new.name, TableConfigName::FarmingPracticeConfig);
        assert!(new.config_fields.is_empty());
    }

    #[test]
    fn config_fields_must_be_an_object() {
        let result = serde_json::from_str::<NewTableConfig>(
            r#"{"name": "FarmingPracticeConfig", "config_fields": [1, 2]}"#,
        );
        assert!(result.is_err());
    }
}
