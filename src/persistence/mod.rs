//! Persistence of word lists needs the following components
//! - Header (ordered column names, the first one is the key column)
//! - Row (fixed width per table, written once and read many times)
//! - Table (one parsed source file, immutable after parsing)
//! - Registry (all tables by list name, built once at startup)
//!

//  All modules of this lib
mod registry;
mod row;
mod schema;
mod table;

//  External API
pub use registry::{WordListRegistry, list_name_for};
pub use row::Row;
pub use schema::Header;
pub use table::{MalformedRow, Table};
