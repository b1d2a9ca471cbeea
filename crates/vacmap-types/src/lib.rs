#![warn(clippy::pedantic)]

pub mod coordinate;
pub mod model;
pub mod path;
pub mod room;
pub mod strategy;

pub use coordinate::Coordinate;
pub use model::MapModel;
pub use path::PathSegment;
pub use room::{Room, RoomError};
pub use strategy::{Strategy, UnclassifiedReason};
