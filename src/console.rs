//! console.rs
//!
//! Menu-driven console session on top of the screening room.
//!
//! Owns the room from the moment the dimensions are read, keeps all seat and
//! pricing logic out of the I/O layer, and stays generic over its
//! reader/writer pair so whole session transcripts can be asserted in tests.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};

use crate::errors::BookingError;
use crate::models::Coordinate;
use crate::room::ScreeningRoom;

const MENU: &str = "1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit";

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the full session: room construction followed by the menu loop.
    ///
    /// Bad dimension input is fatal (no valid room exists); everything after
    /// that recovers by re-prompting. EOF at any prompt ends the session
    /// cleanly.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let Some(mut room) = self.setup_room()? else {
            return Ok(());
        };
        self.menu_loop(&mut room)
    }

    fn setup_room(&mut self) -> anyhow::Result<Option<ScreeningRoom>> {
        let Some(rows) = self.prompt("Enter the number of rows:")? else {
            return Ok(None);
        };
        let rows: i64 = rows
            .parse()
            .with_context(|| format!("the number of rows must be an integer, got '{rows}'"))?;

        let Some(seats) = self.prompt("Enter the number of seats in each row:")? else {
            return Ok(None);
        };
        let seats: i64 = seats
            .parse()
            .with_context(|| format!("the number of seats must be an integer, got '{seats}'"))?;

        let room = ScreeningRoom::new(rows, seats)?;
        info!(rows, seats_per_row = seats, "screening room created");
        Ok(Some(room))
    }

    fn menu_loop(&mut self, room: &mut ScreeningRoom) -> anyhow::Result<()> {
        loop {
            let Some(input) = self.prompt(MENU)? else {
                return Ok(());
            };
            let choice: i64 = match input.parse() {
                Ok(choice) => choice,
                Err(_) => {
                    // Parse errors re-prompt at the menu level.
                    writeln!(self.writer, "'{input}' is not a menu option")?;
                    continue;
                }
            };
            match choice {
                1 => self.show_seats(room)?,
                2 => self.buy_ticket(room)?,
                3 => self.show_statistics(room)?,
                _ => {
                    info!("session finished");
                    return Ok(());
                }
            }
        }
    }

    fn show_seats(&mut self, room: &ScreeningRoom) -> anyhow::Result<()> {
        write!(self.writer, "{}", room.render_layout())?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Retries in place until one purchase succeeds. Out-of-range
    /// coordinates, unparseable numbers and already-sold seats all print
    /// their message and re-prompt.
    fn buy_ticket(&mut self, room: &mut ScreeningRoom) -> anyhow::Result<()> {
        loop {
            let Some(row) = self.prompt("Enter a row number:")? else {
                return Ok(());
            };
            let Some(number) = self.prompt("Enter a seat number in that row:")? else {
                return Ok(());
            };
            let (Ok(row), Ok(number)) = (row.parse::<i64>(), number.parse::<i64>()) else {
                writeln!(self.writer, "{}", BookingError::OutOfRange)?;
                continue;
            };

            let coordinate = Coordinate::new(number, row);
            match room.purchase(coordinate) {
                Ok(()) => {
                    // In range by construction once the purchase went through.
                    let price = room.price_of_seat_at(coordinate)?;
                    writeln!(self.writer, "Ticket price: ${price}")?;
                    writeln!(self.writer)?;
                    return Ok(());
                }
                Err(err) => {
                    warn!(row, seat = number, %err, "purchase rejected");
                    writeln!(self.writer, "{err}")?;
                }
            }
        }
    }

    fn show_statistics(&mut self, room: &ScreeningRoom) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Number of purchased tickets: {}",
            room.purchased_count()
        )?;
        writeln!(self.writer, "Percentage: {:.2}%", room.occupancy_percentage())?;
        writeln!(self.writer, "Current income: ${}", room.current_income())?;
        writeln!(self.writer, "Total income: ${}", room.total_income())?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Prints the prompt, then reads and trims one line. `None` on EOF.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        let mut console = Console::new(input.as_bytes(), &mut output);
        console.run().expect("session should not fail");
        String::from_utf8(output).expect("session output is utf-8")
    }

    const DIMENSION_PROMPTS: &str =
        "Enter the number of rows:\nEnter the number of seats in each row:\n";

    #[test]
    fn exits_on_zero() {
        let output = run_session("2\n3\n0\n");
        assert_eq!(output, format!("{DIMENSION_PROMPTS}{MENU}\n"));
    }

    #[test]
    fn exits_cleanly_on_eof() {
        assert_eq!(run_session(""), "Enter the number of rows:\n");
        let output = run_session("2\n3\n");
        assert_eq!(output, format!("{DIMENSION_PROMPTS}{MENU}\n"));
    }

    #[test]
    fn shows_the_seating_chart() {
        let output = run_session("2\n3\n1\n0\n");
        let expected = format!(
            "{DIMENSION_PROMPTS}{MENU}\nCinema:\n  1 2 3\n1 S S S\n2 S S S\n\n{MENU}\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn buys_a_ticket_and_prints_its_price() {
        // room(6,10): 60 seats, so every seat costs the front price.
        let output = run_session("6\n10\n2\n3\n6\n0\n");
        let expected = format!(
            "{DIMENSION_PROMPTS}{MENU}\n\
             Enter a row number:\nEnter a seat number in that row:\n\
             Ticket price: $10\n\n{MENU}\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn back_tier_seat_costs_eight_in_a_large_room() {
        // room(10,9): rows 6..10 are back tier.
        let output = run_session("10\n9\n2\n9\n1\n0\n");
        assert!(output.contains("Ticket price: $8\n"));
    }

    #[test]
    fn repurchase_and_bad_coordinates_reprompt_until_a_sale_succeeds() {
        let input = "10\n9\n2\n1\n1\n2\n20\n1\n2\nx\n1\n2\n1\n1\n2\n1\n2\n0\n";
        let output = run_session(input);
        assert!(output.contains("Wrong input!\n"));
        assert!(output.contains("That ticket has already been purchased!\n"));
        // First sale row 1 seat 1 (front), final sale row 1 seat 2.
        assert_eq!(output.matches("Ticket price: $10\n").count(), 2);
    }

    #[test]
    fn statistics_report_counts_percentage_and_income() {
        // Reference scenario: purchase (1,1) front and (1,9) back in room(10,9).
        let input = "10\n9\n2\n1\n1\n2\n9\n1\n3\n0\n";
        let output = run_session(input);
        let expected_stats = "Number of purchased tickets: 2\n\
                              Percentage: 2.22%\n\
                              Current income: $18\n\
                              Total income: $810\n\n";
        assert!(output.contains(expected_stats), "output was: {output}");
    }

    #[test]
    fn fresh_room_statistics_are_all_zero() {
        let output = run_session("5\n5\n3\n0\n");
        assert!(output.contains(
            "Number of purchased tickets: 0\nPercentage: 0.00%\nCurrent income: $0\nTotal income: $250\n"
        ));
    }

    #[test]
    fn unknown_menu_text_reprompts() {
        let output = run_session("2\n3\nmenu\n0\n");
        assert!(output.contains("'menu' is not a menu option\n"));
        assert_eq!(output.matches(MENU).count(), 2);
    }

    #[test]
    fn non_positive_dimensions_abort_startup() {
        let mut output = Vec::new();
        let mut console = Console::new("0\n5\n".as_bytes(), &mut output);
        let err = console.run().unwrap_err();
        assert_eq!(
            err.downcast_ref::<BookingError>(),
            Some(&BookingError::InvalidConfiguration { rows: 0, seats_per_row: 5 })
        );
    }

    #[test]
    fn unparseable_dimensions_abort_startup() {
        let mut output = Vec::new();
        let mut console = Console::new("ten\n".as_bytes(), &mut output);
        let err = console.run().unwrap_err();
        assert!(err.to_string().contains("must be an integer"));
    }
}
