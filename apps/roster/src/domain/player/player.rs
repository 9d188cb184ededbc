use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

use super::value_objects::{Age, StatLine};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::names::normalize_name;

/// A player that can be signed to a team
///
/// # Invariants
/// - Name and position are stored normalized (trimmed, title-cased)
/// - Name is never empty or made only of digits
/// - Stat accumulators never go below zero
/// - `team` is set only while the player sits on a team's roster
///
/// # Example
/// ```
/// use team_roster::domain::player::{Age, Player};
///
/// let player = Player::new("jane doe", Age::new(24).unwrap(), "striker").expect("valid player");
///
/// assert_eq!(player.name(), "Jane Doe");
/// assert_eq!(
///     player.to_string(),
///     "Name: Jane Doe, Age: 24, Position: Striker, Team: None, Stats: [No stats yet]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: Uuid,
    name: String,
    age: Age,
    position: String,
    stats: StatLine,
    team: Option<String>,
}

impl Player {
    /// Creates a player with no stats and no team
    ///
    /// # Returns
    /// * `Err(EmptyName)` - If the name is blank after trimming
    /// * `Err(NumericName)` - If the name is made only of digits
    pub fn new(name: &str, age: Age, position: &str) -> DomainResult<Self> {
        Self::with_stats(name, age, position, StatLine::new())
    }

    /// Creates a player carrying pre-existing stats
    pub fn with_stats(name: &str, age: Age, position: &str, stats: StatLine) -> DomainResult<Self> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(DomainError::EmptyName("Player name"));
        }
        if name.chars().all(char::is_numeric) {
            return Err(DomainError::NumericName("Player name"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            age,
            position: normalize_name(position),
            stats,
            team: None,
        })
    }

    /// Adds `value` to the named stat and returns the new total
    ///
    /// Negative values are rejected and leave the accumulator untouched.
    pub fn update_stat(&mut self, stat: &str, value: Decimal) -> DomainResult<Decimal> {
        self.stats.add(stat, value)
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn stats(&self) -> &StatLine {
        &self.stats
    }

    /// Name of the owning team, if any
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    pub(crate) fn assign_team(&mut self, team_name: &str) {
        self.team = Some(team_name.to_string());
    }

    pub(crate) fn release(&mut self) {
        self.team = None;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Position: {}, Team: {}, Stats: [{}]",
            self.name,
            self.age,
            self.position,
            self.team.as_deref().unwrap_or("None"),
            self.stats
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age(years: u64) -> Age {
        Age::new(years).unwrap()
    }

    #[test]
    fn create_player_normalizes_name_and_position() {
        let player = Player::new("  kylian mbappe", age(25), "FORWARD").unwrap();

        assert_eq!(player.name(), "Kylian Mbappe");
        assert_eq!(player.position(), "Forward");
        assert_eq!(player.age().years(), 25);
        assert!(player.team().is_none());
        assert!(player.stats().is_empty());
    }

    #[test]
    fn create_player_with_blank_name_fails() {
        let result = Player::new("   ", age(20), "Defender");
        assert_eq!(result, Err(DomainError::EmptyName("Player name")));
    }

    #[test]
    fn create_player_with_numeric_name_fails() {
        let result = Player::new(" 1234 ", age(20), "Defender");
        assert_eq!(result, Err(DomainError::NumericName("Player name")));
        assert!(Player::new("Player 1", age(20), "Defender").is_ok());
    }

    #[test]
    fn fresh_player_renders_without_stats() {
        let player = Player::new("ann lee", age(31), "keeper").unwrap();

        assert_eq!(
            player.to_string(),
            "Name: Ann Lee, Age: 31, Position: Keeper, Team: None, Stats: [No stats yet]"
        );
    }

    #[test]
    fn update_stat_accumulates() {
        let mut player = Player::new("Ann Lee", age(31), "Keeper").unwrap();

        player.update_stat("Saves", Decimal::from(5)).unwrap();
        let total = player.update_stat("Saves", Decimal::from(3)).unwrap();

        assert_eq!(total, Decimal::from(8));
        assert_eq!(player.stats().get("Saves"), Some(Decimal::from(8)));
    }

    #[test]
    fn update_stat_rejects_negative() {
        let mut player = Player::new("Ann Lee", age(31), "Keeper").unwrap();
        player.update_stat("Saves", Decimal::from(5)).unwrap();

        let result = player.update_stat("Saves", Decimal::from(-1));

        assert!(matches!(result, Err(DomainError::NegativeStatValue(_))));
        assert_eq!(player.stats().get("Saves"), Some(Decimal::from(5)));
    }

    #[test]
    fn render_shows_team_and_stats() {
        let mut player = Player::new("Ann Lee", age(31), "Keeper").unwrap();
        player.assign_team("City");
        player.update_stat("Saves", Decimal::from(4)).unwrap();
        player.update_stat("Clean Sheets", Decimal::ONE).unwrap();

        assert_eq!(
            player.to_string(),
            "Name: Ann Lee, Age: 31, Position: Keeper, Team: City, Stats: [Saves: 4, Clean Sheets: 1]"
        );

        player.release();
        assert!(player.team().is_none());
    }

    #[test]
    fn with_stats_keeps_existing_totals() {
        let mut stats = StatLine::new();
        stats.add("Goals", Decimal::from(10)).unwrap();

        let player = Player::with_stats("bo", age(19), "wing", stats).unwrap();

        assert_eq!(player.stats().get("Goals"), Some(Decimal::from(10)));
    }
}
