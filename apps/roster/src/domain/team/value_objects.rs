use std::fmt;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::names::normalize_name;

/// Lifecycle status of a match
///
/// # Status Transitions
/// ```text
/// Scheduled -> Completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Fixture is on the calendar, no result yet
    Scheduled,
    /// A result has been recorded
    Completed,
}

impl MatchStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use team_roster::domain::team::value_objects::MatchStatus;
    ///
    /// assert!(MatchStatus::Scheduled.can_transition_to(MatchStatus::Completed));
    /// assert!(!MatchStatus::Completed.can_transition_to(MatchStatus::Scheduled));
    /// ```
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        matches!((self, next), (MatchStatus::Scheduled, MatchStatus::Completed))
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Outcome recorded against a match
///
/// Anything other than a win or a loss (draws, abandonments...) is kept
/// verbatim in normalized form and does not count towards the ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
    Other(String),
}

impl MatchResult {
    /// Parses a result from raw text, case-insensitively
    ///
    /// # Example
    /// ```
    /// use team_roster::domain::team::value_objects::MatchResult;
    ///
    /// assert_eq!(MatchResult::parse(" WIN ").unwrap(), MatchResult::Win);
    /// assert_eq!(MatchResult::parse("draw").unwrap().to_string(), "Draw");
    /// ```
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = normalize_name(raw);
        match normalized.as_str() {
            "" => Err(DomainError::EmptyResult),
            "Win" => Ok(MatchResult::Win),
            "Loss" => Ok(MatchResult::Loss),
            _ => Ok(MatchResult::Other(normalized)),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Win => write!(f, "Win"),
            MatchResult::Loss => write!(f, "Loss"),
            MatchResult::Other(text) => write!(f, "{}", text),
        }
    }
}

/// A fixture against an opponent on a given date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    id: Uuid,
    opponent: String,
    date: String,
    result: Option<MatchResult>,
}

impl MatchRecord {
    /// Creates a scheduled match; `opponent` must already be normalized
    pub(crate) fn scheduled(opponent: String, date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            opponent,
            date,
            result: None,
        }
    }

    /// Completes the match with `result`
    ///
    /// # Returns
    /// * `Err(InvalidMatchTransition)` - If a result is already recorded
    pub(crate) fn complete(&mut self, result: MatchResult) -> DomainResult<()> {
        let next = MatchStatus::Completed;
        if !self.status().can_transition_to(next) {
            return Err(DomainError::InvalidMatchTransition {
                from: self.status().to_string(),
                to: next.to_string(),
            });
        }

        self.result = Some(result);
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn status(&self) -> MatchStatus {
        match self.result {
            Some(_) => MatchStatus::Completed,
            None => MatchStatus::Scheduled,
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self
            .result
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Pending".to_string());
        write!(
            f,
            "Opponent: {}, Date: {}, Result: {}",
            self.opponent, self.date, result
        )
    }
}

/// Win and loss counts over completed matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLossRecord {
    pub wins: usize,
    pub losses: usize,
}

impl WinLossRecord {
    /// Matches that ended in a win or a loss
    pub fn decided(&self) -> usize {
        self.wins + self.losses
    }

    /// Share of decided matches that were won, `None` before any are decided
    pub fn ratio(&self) -> Option<f64> {
        match self.decided() {
            0 => None,
            total => Some(self.wins as f64 / total as f64),
        }
    }
}

impl fmt::Display for WinLossRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ratio() {
            Some(ratio) => write!(f, "{}/{} ({:.2})", self.wins, self.losses, ratio),
            None => write!(f, "No completed matches yet."),
        }
    }
}
