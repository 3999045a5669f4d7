mod app_state;
mod tabs;

// Re-export all types from submodules
pub use app_state::*;
pub use tabs::*;
