//! The search form, its states, and the ways it gets drawn.

pub mod backend;
pub mod locale;
pub mod render;
pub mod state;

pub use backend::ProxyClient;
pub use locale::DateStyle;
pub use state::{SearchPage, SearchResultState};
