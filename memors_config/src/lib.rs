mod schema;

pub use schema::{Config, FilesConfig};
