pub mod config;
pub mod console;
pub mod errors;
pub mod models;
pub mod room;

pub use errors::BookingError;
pub use room::ScreeningRoom;
