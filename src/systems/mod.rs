pub mod export;
pub mod grid;
pub mod preset;
pub mod tower;
pub mod ui;
