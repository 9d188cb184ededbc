use std::io::{BufRead, Write};

use super::log_event;
use crate::cli::errors::CliResult;
use crate::cli::prompt::Prompter;
use crate::domain::team::Team;

/// Creates a team, replacing any team from earlier in the session
pub fn create_team<R: BufRead, W: Write>(
    current: &mut Option<Team>,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let raw = prompter.ask("Enter team name: ")?;

    let team = match Team::new(&raw) {
        Ok(team) => team,
        Err(err) => {
            tracing::warn!(error = %err, "team creation rejected");
            return prompter.say(err);
        }
    };

    if let Some(previous) = current.as_ref() {
        tracing::warn!(previous = %previous.name(), "replacing existing team");
    }
    tracing::info!(team = %team.name(), id = %team.id(), "team created");
    prompter.say(format!("Team '{}' created successfully!", team.name()))?;
    *current = Some(team);

    Ok(())
}

/// Prints the roster
pub fn display_team<R: BufRead, W: Write>(
    team: &Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    tracing::debug!(team = %team.name(), players = team.players().len(), "displaying roster");
    prompter.say(format!("\n{}", team.render_roster()))
}

/// Prints the win/loss record over completed matches
pub fn win_loss_ratio<R: BufRead, W: Write>(
    team: &Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let record = team.win_loss_record();
    tracing::debug!(wins = record.wins, losses = record.losses, "win/loss requested");

    match record.ratio() {
        Some(_) => prompter.say(format!("Win/Loss Ratio for {}: {}", team.name(), record)),
        None => prompter.say(record),
    }
}

/// Clears roster and schedule after the user confirms
pub fn reset_team<R: BufRead, W: Write>(
    team: &mut Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let confirmed =
        prompter.confirm("Are you sure you want to reset all team data? (yes/no): ")?;

    match team.reset(confirmed) {
        Some(event) => {
            log_event(&event);
            prompter.say("Team data cleared successfully!")
        }
        None => prompter.say("Action cancelled."),
    }
}
