pub mod engine;
pub mod event;
pub mod level;
pub mod maze;
pub mod save;
