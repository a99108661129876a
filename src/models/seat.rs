use serde::{Deserialize, Serialize};

/// Per-seat state. One-way transition: `Available` -> `Sold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    Available,
    Sold,
}

impl SeatState {
    /// Glyph used in the rendered seating chart.
    pub fn glyph(self) -> char {
        match self {
            SeatState::Available => 'S',
            SeatState::Sold => 'B',
        }
    }
}
