//! Entity models and request bodies
//!
//! Entities are what the store hands back (identity and timestamps assigned).
//! `New*` types are request bodies; they carry only client-supplied fields,
//! so unknown enum names and wrongly shaped payloads are rejected while
//! deserializing, before any repository is touched.

pub mod validation;
pub mod names;
pub mod user;
pub mod table_config;
pub mod table_view;
pub mod row;

pub use validation::ValidationError;
pub use names::{TableConfigName, TableViewName};
pub use user::{NewUser, User};
pub use table_config::{NewTableConfig, TableConfig};
pub use table_view::{NewTableView, TableView};
pub use row::{NewRow, Row};

/// Schema-free JSON payload (`config_fields`, `view_fields`, `data`).
///
/// Key order is preserved through storage and back.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Store-assigned identity shared by every entity.
pub type EntityId = i64;
