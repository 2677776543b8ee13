pub mod events;
pub mod render;
pub mod view;
