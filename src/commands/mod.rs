pub mod misc;
pub mod search;
pub mod serve;

pub use misc::{display_banner, generate_completions};
pub use search::search_repos;
pub use serve::serve;
