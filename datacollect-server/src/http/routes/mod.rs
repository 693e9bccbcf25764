//! Route handlers organized by resource
//!
//! Each handler takes a fresh [`UnitOfWork`](crate::db::UnitOfWork), makes
//! one repository call, and commits only when that call mutated.

pub mod health;
pub mod users;
pub mod table_configs;
pub mod table_views;
pub mod rows;
