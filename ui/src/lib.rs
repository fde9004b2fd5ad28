#![warn(clippy::all, rust_2018_idioms)]
//! egui front end for the user data grid.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::UserGridApp;
