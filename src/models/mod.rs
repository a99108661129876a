pub mod coordinate;
pub mod seat;

pub use coordinate::Coordinate;
pub use seat::SeatState;
