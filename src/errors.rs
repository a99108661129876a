use thiserror::Error;

/// Failures the booking core reports to its caller.
///
/// `OutOfRange` and `AlreadySold` are recoverable at the console level by
/// re-prompting; `InvalidConfiguration` means no valid room exists and
/// aborts startup. The `Display` text doubles as the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Wrong input!")]
    OutOfRange,

    #[error("That ticket has already been purchased!")]
    AlreadySold,

    #[error("invalid room configuration: {rows} rows x {seats_per_row} seats per row (both must be at least 1)")]
    InvalidConfiguration { rows: i64, seats_per_row: i64 },
}
