use super::events::{TeamEvent, TeamEventKind};
use super::value_objects::{MatchRecord, MatchResult, MatchStatus, WinLossRecord};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::names::normalize_name;
use crate::domain::player::Player;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Team aggregate root
///
/// Owns the roster and the match schedule of a single team.
///
/// # Invariants
/// - Name is trimmed, title-cased and never empty
/// - No two players share a normalized name
/// - No two matches share the same (opponent, date) pair
/// - A result is only recorded against a match that has none yet
///
/// # Example
/// ```
/// use team_roster::domain::player::{Age, Player};
/// use team_roster::domain::team::Team;
///
/// let mut team = Team::new("  river city ").expect("valid team");
/// let player = Player::new("ann lee", Age::new(22).unwrap(), "keeper").unwrap();
///
/// team.add_player(player).expect("new player");
///
/// assert_eq!(team.name(), "River City");
/// assert_eq!(team.players()[0].team(), Some("River City"));
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Returns
    /// * `Err(EmptyName)` - If the name is blank after trimming
    pub fn new(team_name: &str) -> DomainResult<Self> {
        let name = normalize_name(team_name);
        if name.is_empty() {
            return Err(DomainError::EmptyName("Team name"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            players: Vec::new(),
            matches: Vec::new(),
            created_at: Utc::now(),
        })
    }

    // ===== Roster =====

    /// Signs a player to the roster
    ///
    /// # Returns
    /// * `Ok(TeamEvent)` - PlayerAdded event
    /// * `Err(DuplicatePlayer)` - A player with the same name is already on
    ///   the roster; the roster is left unchanged
    pub fn add_player(&mut self, mut player: Player) -> DomainResult<TeamEvent> {
        if self.position_of(player.name()).is_some() {
            return Err(DomainError::DuplicatePlayer(player.name().to_string()));
        }

        player.assign_team(&self.name);
        let kind = TeamEventKind::PlayerAdded {
            player_id: player.id(),
            name: player.name().to_string(),
        };
        self.players.push(player);

        Ok(self.event(kind))
    }

    /// Removes a player by name and hands it back with its team cleared
    pub fn remove_player(&mut self, name: &str) -> DomainResult<(Player, TeamEvent)> {
        let index = self
            .position_of(name)
            .ok_or_else(|| DomainError::PlayerNotFound(normalize_name(name)))?;

        let mut player = self.players.remove(index);
        player.release();

        let event = self.event(TeamEventKind::PlayerRemoved {
            player_id: player.id(),
            name: player.name().to_string(),
        });
        Ok((player, event))
    }

    /// Looks a player up by name
    pub fn find_player(&self, name: &str) -> DomainResult<&Player> {
        self.position_of(name)
            .map(|index| &self.players[index])
            .ok_or_else(|| DomainError::PlayerNotFound(normalize_name(name)))
    }

    /// Adds `value` to a stat of the named player
    pub fn update_player_stat(
        &mut self,
        name: &str,
        stat: &str,
        value: Decimal,
    ) -> DomainResult<TeamEvent> {
        let index = self
            .position_of(name)
            .ok_or_else(|| DomainError::PlayerNotFound(normalize_name(name)))?;

        let player = &mut self.players[index];
        let total = player.update_stat(stat, value)?;
        let kind = TeamEventKind::StatUpdated {
            player_id: player.id(),
            stat: stat.trim().to_string(),
            total,
        };

        Ok(self.event(kind))
    }

    // ===== Schedule =====

    /// Adds a fixture against `opponent` on `date`
    ///
    /// # Returns
    /// * `Err(EmptyName)` - If the opponent is blank
    /// * `Err(DuplicateMatch)` - Same opponent already booked on that date
    pub fn schedule_match(&mut self, opponent: &str, date: &str) -> DomainResult<TeamEvent> {
        let opponent = normalize_name(opponent);
        if opponent.is_empty() {
            return Err(DomainError::EmptyName("Opponent name"));
        }
        let date = date.trim().to_string();

        if self
            .matches
            .iter()
            .any(|m| m.opponent() == opponent && m.date() == date)
        {
            return Err(DomainError::DuplicateMatch { opponent, date });
        }

        let record = MatchRecord::scheduled(opponent, date);
        let kind = TeamEventKind::MatchScheduled {
            match_id: record.id(),
            opponent: record.opponent().to_string(),
            date: record.date().to_string(),
        };
        self.matches.push(record);

        Ok(self.event(kind))
    }

    /// Records a result against the earliest pending match with `opponent`
    ///
    /// # Returns
    /// * `Err(EmptyName)` - If the opponent is blank
    /// * `Err(NoScheduledMatch)` - The opponent was never scheduled
    /// * `Err(ResultAlreadyRecorded)` - Every match against them is completed
    pub fn record_result(&mut self, opponent: &str, result: MatchResult) -> DomainResult<TeamEvent> {
        let opponent = normalize_name(opponent);
        if opponent.is_empty() {
            return Err(DomainError::EmptyName("Opponent name"));
        }

        let pending = self
            .matches
            .iter()
            .position(|m| m.opponent() == opponent && m.status() == MatchStatus::Scheduled);

        let index = match pending {
            Some(index) => index,
            None if self.matches.iter().any(|m| m.opponent() == opponent) => {
                return Err(DomainError::ResultAlreadyRecorded(opponent));
            }
            None => return Err(DomainError::NoScheduledMatch(opponent)),
        };

        let record = &mut self.matches[index];
        let label = result.to_string();
        record.complete(result)?;
        let kind = TeamEventKind::ResultRecorded {
            match_id: record.id(),
            opponent: record.opponent().to_string(),
            result: label,
        };

        Ok(self.event(kind))
    }

    /// Counts wins and losses over completed matches
    pub fn win_loss_record(&self) -> WinLossRecord {
        self.matches
            .iter()
            .fold(WinLossRecord::default(), |mut record, m| {
                match m.result() {
                    Some(MatchResult::Win) => record.wins += 1,
                    Some(MatchResult::Loss) => record.losses += 1,
                    _ => {}
                }
                record
            })
    }

    /// Clears roster and schedule when `confirmed`; does nothing otherwise
    pub fn reset(&mut self, confirmed: bool) -> Option<TeamEvent> {
        if !confirmed {
            return None;
        }

        let players_removed = self.players.len();
        let matches_removed = self.matches.len();
        for player in &mut self.players {
            player.release();
        }
        self.players.clear();
        self.matches.clear();

        Some(self.event(TeamEventKind::Reset {
            players_removed,
            matches_removed,
        }))
    }

    // ===== Rendering =====

    /// Multi-line roster listing
    pub fn render_roster(&self) -> String {
        let mut out = format!("Team {} Players:", self.name);
        if self.players.is_empty() {
            out.push_str("\nNo players added yet.");
        }
        for player in &self.players {
            out.push_str("\n - ");
            out.push_str(&player.to_string());
        }
        out
    }

    /// Multi-line schedule listing
    pub fn render_matches(&self) -> String {
        let mut out = format!("Match Schedule for {}:", self.name);
        if self.matches.is_empty() {
            out.push_str("\nNo matches scheduled yet.");
        }
        for record in &self.matches {
            out.push_str("\n - ");
            out.push_str(&record.to_string());
        }
        out
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        let name = normalize_name(name);
        self.players.iter().position(|p| p.name() == name)
    }

    fn event(&self, kind: TeamEventKind) -> TeamEvent {
        TeamEvent::new(self.name.clone(), kind)
    }
}
