//! Book shop application library.
//!
//! Thin CRUD glue: HTTP handlers that marshal JSON request bodies into
//! store item representations and store responses back into JSON.

pub mod modules;
pub mod utils;
