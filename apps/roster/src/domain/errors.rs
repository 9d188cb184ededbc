use thiserror::Error;

/// Errors raised by the roster domain
///
/// Validation failures and lookups that found nothing both land here; the
/// interactive layer turns them into user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} cannot be empty.")]
    EmptyName(&'static str),

    #[error("{0} cannot be numeric. Please enter a valid name.")]
    NumericName(&'static str),

    #[error("Invalid age! Age must be a positive number.")]
    InvalidAge,

    #[error("Invalid input! Please enter a numeric age.")]
    InvalidAgeInput(String),

    #[error("Age {0} is too large.")]
    AgeOutOfRange(String),

    #[error("Invalid input! Please enter a numeric value.")]
    InvalidStatValue(String),

    #[error("Stat value cannot be negative.")]
    NegativeStatValue(String),

    #[error("Stat value {0} is outside the supported range.")]
    StatValueOutOfRange(String),

    #[error("Stat name cannot be empty.")]
    EmptyStatName,

    #[error("Match result cannot be empty.")]
    EmptyResult,

    #[error("Player {0} is already in the team.")]
    DuplicatePlayer(String),

    #[error("Player {0} not found in the team.")]
    PlayerNotFound(String),

    #[error("Match already scheduled against {opponent} on {date}.")]
    DuplicateMatch { opponent: String, date: String },

    #[error("No scheduled match found against {0}.")]
    NoScheduledMatch(String),

    #[error("Result already recorded for every match against {0}.")]
    ResultAlreadyRecorded(String),

    #[error("Invalid match transition from {from} to {to}")]
    InvalidMatchTransition { from: String, to: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
