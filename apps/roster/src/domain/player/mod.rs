// Player domain module
// Contains the player entity and its value objects

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::Player;
pub use value_objects::{parse_stat_value, Age, StatLine};
