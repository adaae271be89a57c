pub mod convert;

pub use convert::{convert, read_table, write_json, Record, Table};
