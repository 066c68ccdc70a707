pub mod content_type;
pub mod creation;
pub mod render;
pub mod style;
