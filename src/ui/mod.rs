pub mod render;
pub mod router;
pub mod screens;
pub mod theme;

pub use render::render;
pub use router::{Router, Screen};
pub use theme::Theme;
