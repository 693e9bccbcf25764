//! TableView entity - display/validation overlay on one table config

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, JsonObject, TableViewName};

/// Stored table view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub name: TableViewName,
    pub table_config_id: EntityId,
    pub view_fields: JsonObject,
}

/// Create table view request
#[derive(Debug, Clone, Deserialize)]
pub struct NewTableView {
    pub name: TableViewName,
    pub table_config_id: EntityId,
    #[serde(default)]
    pub view_fields: JsonObject,
}
