//! room.rs
//!
//! The screening room: a 2D seat grid plus the pricing tiers derived from
//! the room dimensions.
//!
//! Covers the following functionality:
//! - Seat purchase with conflict/bounds checking.
//! - Tier pricing of individual seats.
//! - Sales statistics: purchased count, occupancy, current and total income.
//! - Rendering the seating chart as text.

use tracing::debug;

use crate::errors::BookingError;
use crate::models::{Coordinate, SeatState};

/// Price of a seat in the rows nearest the screen, whole currency units.
pub const FRONT_PRICE: u32 = 10;
/// Price of a seat in the remaining rows.
pub const BACK_PRICE: u32 = 8;

// Rooms at or under this capacity charge the front price everywhere.
const FLAT_PRICE_CAPACITY: usize = 60;

/// A single screening room. Created once per session; dimensions and the
/// tier split are immutable afterwards, only seat states change.
#[derive(Debug, Clone)]
pub struct ScreeningRoom {
    rows: usize,
    seats_per_row: usize,
    grid: Vec<Vec<SeatState>>,
    front_rows: usize,
    // Pure function of the dimensions, so computed once and cached.
    total_income: u64,
}

impl ScreeningRoom {
    /// Builds a room with every seat `Available`.
    ///
    /// Small rooms (up to 60 seats) are entirely front tier; larger rooms
    /// put the first `rows / 2` rows (rounded down) in the front tier.
    pub fn new(rows: i64, seats_per_row: i64) -> Result<Self, BookingError> {
        if rows < 1 || seats_per_row < 1 {
            return Err(BookingError::InvalidConfiguration { rows, seats_per_row });
        }
        let rows = rows as usize;
        let seats_per_row = seats_per_row as usize;

        let front_rows = if rows * seats_per_row <= FLAT_PRICE_CAPACITY {
            rows
        } else {
            rows / 2
        };
        let back_rows = rows - front_rows;
        let total_income = (front_rows * seats_per_row) as u64 * u64::from(FRONT_PRICE)
            + (back_rows * seats_per_row) as u64 * u64::from(BACK_PRICE);

        Ok(Self {
            rows,
            seats_per_row,
            grid: vec![vec![SeatState::Available; seats_per_row]; rows],
            front_rows,
            total_income,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn total_seats(&self) -> usize {
        self.rows * self.seats_per_row
    }

    /// Marks the seat at the 1-based coordinate as sold.
    ///
    /// Fails with `OutOfRange` for coordinates outside the grid and with
    /// `AlreadySold` when the seat has been purchased before; a sold seat
    /// never becomes available again.
    pub fn purchase(&mut self, coordinate: Coordinate) -> Result<(), BookingError> {
        let (row, column) = coordinate
            .grid_indices(self.rows, self.seats_per_row)
            .ok_or(BookingError::OutOfRange)?;
        if self.grid[row][column] == SeatState::Sold {
            return Err(BookingError::AlreadySold);
        }
        self.grid[row][column] = SeatState::Sold;
        debug!(row = coordinate.row, seat = coordinate.column, "seat sold");
        Ok(())
    }

    /// Tier price of the seat at the 1-based coordinate, or `OutOfRange`
    /// when the coordinate misses the grid.
    pub fn price_of_seat_at(&self, coordinate: Coordinate) -> Result<u32, BookingError> {
        let (row, _) = coordinate
            .grid_indices(self.rows, self.seats_per_row)
            .ok_or(BookingError::OutOfRange)?;
        Ok(if row < self.front_rows {
            FRONT_PRICE
        } else {
            BACK_PRICE
        })
    }

    /// Number of sold seats, recomputed by scanning the grid.
    pub fn purchased_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|seat| **seat == SeatState::Sold)
            .count()
    }

    /// Sold share of the room in percent.
    pub fn occupancy_percentage(&self) -> f64 {
        self.purchased_count() as f64 / self.total_seats() as f64 * 100.0
    }

    /// Revenue from the seats sold so far, classifying each row by tier.
    pub fn current_income(&self) -> u64 {
        self.grid
            .iter()
            .enumerate()
            .map(|(row, seats)| {
                let price = if row < self.front_rows {
                    FRONT_PRICE
                } else {
                    BACK_PRICE
                };
                let sold = seats.iter().filter(|seat| **seat == SeatState::Sold).count();
                sold as u64 * u64::from(price)
            })
            .sum()
    }

    /// Revenue if every seat were sold. Cached at construction.
    pub fn total_income(&self) -> u64 {
        self.total_income
    }

    /// Seating chart as text: a title line, a header of 1-based column
    /// numbers, then one line per row prefixed by its 1-based number with
    /// `S` for available seats and `B` for sold ones.
    pub fn render_layout(&self) -> String {
        let mut out = String::from("Cinema:\n");
        out.push(' ');
        for column in 1..=self.seats_per_row {
            out.push(' ');
            out.push_str(&column.to_string());
        }
        out.push('\n');
        for (row, seats) in self.grid.iter().enumerate() {
            out.push_str(&(row + 1).to_string());
            for seat in seats {
                out.push(' ');
                out.push(seat.glyph());
            }
            out.push('\n');
        }
        out
    }
}
