pub mod occupancy;
pub mod occupant;
pub mod room;
