pub mod types;
pub mod utils;

pub use types::*;
pub use utils::{find_directory_exactly_one, find_entries, find_file_exactly_one, find_file_zero_or_one};
