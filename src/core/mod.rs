pub mod airport;
pub mod config;
pub mod delay;
pub mod errors;
pub mod plane;
pub mod presentation;
pub mod resources;
pub mod simulation;
pub mod types;
