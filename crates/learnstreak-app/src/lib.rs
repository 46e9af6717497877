pub mod application;
pub mod presentation;

pub use presentation::bootstrap::{build_app_state, build_app_state_with_store};
pub use presentation::state::AppState;
