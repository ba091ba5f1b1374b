pub mod app;
pub mod board;
pub mod cell;
pub mod controls;
