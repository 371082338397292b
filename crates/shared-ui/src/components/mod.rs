pub mod action_button;
pub mod panel;
pub mod select_field;
pub mod text_field;

// Re-exports for convenience
pub use action_button::*;
pub use panel::*;
pub use select_field::*;
pub use text_field::*;
