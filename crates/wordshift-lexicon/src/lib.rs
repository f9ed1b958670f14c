pub mod loader;
pub mod table;

pub use loader::{LexiconLoader, LoadError};
pub use table::Table;
