pub mod item;
pub mod order;
pub mod payload;
