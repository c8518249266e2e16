pub mod config;
pub mod controls;
pub mod raytracer;
pub mod scenes;
pub mod utils;
