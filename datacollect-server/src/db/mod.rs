//! Database layer - connection pool, repositories and unit of work
//!
//! # Design Principles
//!
//! - One pool per process, one transaction per request
//! - Repositories stage changes only; the unit of work owns commit
//! - Rely on DB constraints for name uniqueness, no check-then-insert

pub mod error;
pub mod pool;
pub mod repos;
pub mod unit_of_work;

pub use error::{DbError, DbResult};
pub use pool::{create_pool_with_options, init_schema, open};
pub use repos::*;
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
