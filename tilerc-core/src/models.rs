//! Window-side objects the descriptor's rules are evaluated against.
mod window_info;
mod window_type;

pub use window_info::WindowInfo;
pub use window_type::WindowType;
