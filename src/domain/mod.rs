//! Domain data: the tag list and the physics/layout configuration.

pub mod config;
pub mod tags;
