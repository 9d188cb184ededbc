use std::io::{BufRead, Write};

use super::log_event;
use crate::cli::errors::CliResult;
use crate::cli::prompt::Prompter;
use crate::domain::player::{parse_stat_value, Player};
use crate::domain::team::Team;

/// Prompts for a new player and signs them to the team
pub fn add_player<R: BufRead, W: Write>(
    team: &mut Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let name = prompter.ask_player_name("Enter player name: ")?;
    let age = prompter.ask_age("Enter player age: ")?;
    let position = prompter.ask("Enter player position: ")?;

    let result = Player::new(&name, age, &position).and_then(|player| team.add_player(player));
    match result {
        Ok(event) => {
            log_event(&event);
            let added = team.players().last().map(Player::name).unwrap_or_default();
            prompter.say(format!("Player {} added to {}!", added, team.name()))
        }
        Err(err) => {
            tracing::warn!(error = %err, "player not added");
            prompter.say(err)
        }
    }
}

/// Removes a player by name
pub fn remove_player<R: BufRead, W: Write>(
    team: &mut Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let name = prompter.ask("Enter player name to remove: ")?;

    match team.remove_player(&name) {
        Ok((player, event)) => {
            log_event(&event);
            prompter.say(format!("Player {} removed successfully.", player.name()))
        }
        Err(err) => {
            tracing::warn!(error = %err, "player not removed");
            prompter.say(err)
        }
    }
}

/// Prints a single player's details and stats
pub fn view_player_stats<R: BufRead, W: Write>(
    team: &Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let name = prompter.ask("Enter player name to view stats: ")?;

    match team.find_player(&name) {
        Ok(player) => prompter.say(player),
        Err(err) => prompter.say(err),
    }
}

/// Adds to one of a player's stats
///
/// The player is looked up before the stat is asked for, so a typo in the
/// name ends the operation straight away.
pub fn update_player_stat<R: BufRead, W: Write>(
    team: &mut Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let name = prompter.ask("Enter player name to update stats: ")?;
    let player_name = match team.find_player(&name) {
        Ok(player) => player.name().to_string(),
        Err(err) => return prompter.say(err),
    };

    let stat = prompter.ask("Enter stat name to update: ")?;
    let raw_value = prompter.ask("Enter value to add: ")?;

    let result = parse_stat_value(&raw_value)
        .and_then(|value| team.update_player_stat(&player_name, &stat, value));
    match result {
        Ok(event) => {
            log_event(&event);
            prompter.say(format!(
                "{} updated successfully for {}!",
                stat.trim(),
                player_name
            ))
        }
        Err(err) => {
            tracing::warn!(error = %err, player = %player_name, "stat not updated");
            prompter.say(err)
        }
    }
}
