#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod components;
pub mod constants;
pub mod data;
pub mod geometry;
pub mod logging;
pub mod models;
pub mod simulation;

pub use components::app::App;
