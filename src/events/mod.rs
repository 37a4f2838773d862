pub mod actions;
pub mod handler;

pub use actions::Action;
pub use handler::handle_event;
