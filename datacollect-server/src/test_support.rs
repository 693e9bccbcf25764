//! Shared fixtures for unit tests

use serde_json::json;
use tempfile::TempDir;

use crate::db::{self, UnitOfWorkFactory};
use crate::models::{JsonObject, NewRow, NewTableConfig, NewTableView, TableConfigName, TableViewName};

/// Fresh database file in a temp dir. Keep the `TempDir` alive for the test.
pub async fn temp_factory() -> (TempDir, UnitOfWorkFactory) {
    let dir = TempDir::new().expect("temp dir");
    let pool = db::open(&dir.path().join("test.db"), 2)
        .await
        .expect("open test database");
    (dir, UnitOfWorkFactory::new(pool))
}

fn object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn farming_config() -> NewTableConfig {
    NewTableConfig {
        name: TableConfigName::FarmingPracticeConfig,
        config_fields: object(json!({
            "columns": {
                "year": {"type": "int"},
                "crop_type": {"type": "str"},
                "tillage_depth": {"type": "float"},
                "comments": {"type": "str"},
                "is_tilled": {"type": "bool"},
                "external_account_id": {"type": "str"}
            }
        })),
    }
}

pub fn offering_view(table_config_id: i64) -> NewTableView {
    NewTableView {
        name: TableViewName::FarmingPracticeOfferingView,
        table_config_id,
        view_fields: object(json!({
            "columns": {
                "year": {},
                "is_tilled": {},
                "external_account_id": {"validation_regex": ".*"},
                "tillage_depth": {"display_type": "FLOAT_SLIDER"}
            },
            "num_rows": 5,
            "column_order": ["year", "is_tilled", "external_account_id", "tillage_depth"]
        })),
    }
}

pub fn farming_row(table_config_id: i64) -> NewRow {
    NewRow {
        table_config_id,
        data: object(json!({
            "year": 2023,
            "crop_type": "BARLEY",
            "tillage_depth": 10,
            "comments": "Regrow Ag Challenge",
            "is_tilled": true,
            "external_account_id": "ABAFCE13123124"
        })),
    }
}
