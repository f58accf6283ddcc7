pub mod input;
pub mod screen;
