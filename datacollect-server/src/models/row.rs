//! Row entity - one record of data for a table config

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, JsonObject};

/// Stored row
///
/// `data` keys are expected to match the config's columns but are never
/// checked against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub table_config_id: EntityId,
    pub data: JsonObject,
}

/// Create row request
#[derive(Debug, Clone, Deserialize)]
pub struct NewRow {
    pub table_config_id: EntityId,
    #[serde(default)]
    pub data: JsonObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_supplied_identity_is_ignored() {
        let new: NewRow = serde_json::from_str(
            r#"{"id": 99, "created_at": "2020-01-01T00:00:00Z", "table_config_id": 3, "data": {"year": 2023}}"#,
        )
        .unwrap();
        assert_eq!(new.table_config_id, 3);
        assert_eq!(new.data["year"], 2023);
    }

    #[test]
    fn table_config_id_is_required() {
        assert!(serde_json::from_str::<NewRow>(r#"{"data": {}}"#).is_err());
    }
}
