#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod carbon_calculator;
pub mod metro_map;
pub mod metro_tracker;
pub mod station_directory;
pub mod status_panel;
pub mod waste_lookup;
