pub mod mapping;
pub mod reader;
pub mod sample;
pub mod table;

pub use mapping::{ColumnMapping, MappingError};
pub use reader::{detect_delimiter, read_path, read_str};
pub use table::{Table, TableError};
