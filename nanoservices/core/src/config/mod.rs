pub mod loader;
pub mod types;

pub use loader::{load_search, load_searches_dir, parse_search, ConfigError};
pub use types::{Criteria, Emit, SearchConfig};
