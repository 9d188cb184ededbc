use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Domain events that occur within the Team aggregate
///
/// Every successful mutation of a team produces exactly one event. The
/// interactive shell logs them.
///
/// # Example
/// ```
/// use team_roster::domain::team::events::{TeamEvent, TeamEventKind};
/// use uuid::Uuid;
///
/// let event = TeamEvent::new(
///     "City".to_string(),
///     TeamEventKind::PlayerAdded { player_id: Uuid::new_v4(), name: "Ann Lee".to_string() },
/// );
///
/// assert_eq!(event.team_name(), "City");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TeamEvent {
    team_name: String,
    kind: TeamEventKind,
    occurred_at: DateTime<Utc>,
}

/// What happened to the team
#[derive(Debug, Clone, PartialEq)]
pub enum TeamEventKind {
    /// A player joined the roster
    PlayerAdded { player_id: Uuid, name: String },
    /// A player left the roster
    PlayerRemoved { player_id: Uuid, name: String },
    /// A player's stat accumulator grew
    StatUpdated {
        player_id: Uuid,
        stat: String,
        total: Decimal,
    },
    /// A fixture was added to the schedule
    MatchScheduled {
        match_id: Uuid,
        opponent: String,
        date: String,
    },
    /// A fixture received its result
    ResultRecorded {
        match_id: Uuid,
        opponent: String,
        result: String,
    },
    /// Roster and schedule were cleared
    Reset {
        players_removed: usize,
        matches_removed: usize,
    },
}

impl TeamEvent {
    pub fn new(team_name: String, kind: TeamEventKind) -> Self {
        Self {
            team_name,
            kind,
            occurred_at: Utc::now(),
        }
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn kind(&self) -> &TeamEventKind {
        &self.kind
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Short machine-friendly label for logging
    pub fn label(&self) -> &'static str {
        match self.kind {
            TeamEventKind::PlayerAdded { .. } => "player_added",
            TeamEventKind::PlayerRemoved { .. } => "player_removed",
            TeamEventKind::StatUpdated { .. } => "stat_updated",
            TeamEventKind::MatchScheduled { .. } => "match_scheduled",
            TeamEventKind::ResultRecorded { .. } => "result_recorded",
            TeamEventKind::Reset { .. } => "reset",
        }
    }
}
