//! Shared contracts of the kitchen configurator.
//!
//! Everything here is plain data and pure functions: the static option
//! catalogs, the selection record, the option filter and the page shell
//! state. The `frontend` crate renders them, the `backend` crate serves the
//! catalogs as JSON.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
