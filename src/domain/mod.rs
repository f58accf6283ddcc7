pub mod direction;
pub mod profile;
pub mod tile;
