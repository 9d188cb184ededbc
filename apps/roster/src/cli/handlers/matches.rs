use std::io::{BufRead, Write};

use super::log_event;
use crate::cli::errors::CliResult;
use crate::cli::prompt::Prompter;
use crate::domain::team::{MatchResult, Team, TeamEventKind};

pub fn schedule_match<R: BufRead, W: Write>(
    team: &mut Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let opponent = prompter.ask("Enter opponent team name: ")?;
    let date = prompter.ask("Enter match date (YYYY-MM-DD): ")?;

    match team.schedule_match(&opponent, &date) {
        Ok(event) => {
            log_event(&event);
            match event.kind() {
                TeamEventKind::MatchScheduled { opponent, date, .. } => {
                    prompter.say(format!("Match scheduled vs {} on {}!", opponent, date))
                }
                _ => Ok(()),
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "match not scheduled");
            prompter.say(err)
        }
    }
}

pub fn record_result<R: BufRead, W: Write>(
    team: &mut Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    let opponent = prompter.ask("Enter opponent team name: ")?;
    let raw_result = prompter.ask("Enter result (Win/Loss): ")?;

    let outcome = MatchResult::parse(&raw_result)
        .and_then(|result| team.record_result(&opponent, result));
    match outcome {
        Ok(event) => {
            log_event(&event);
            match event.kind() {
                TeamEventKind::ResultRecorded {
                    opponent, result, ..
                } => prompter.say(format!(
                    "Result recorded: {} {} vs {}",
                    team.name(),
                    result,
                    opponent
                )),
                _ => Ok(()),
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "result not recorded");
            prompter.say(err)
        }
    }
}

pub fn display_matches<R: BufRead, W: Write>(
    team: &Team,
    prompter: &mut Prompter<R, W>,
) -> CliResult<()> {
    tracing::debug!(team = %team.name(), matches = team.matches().len(), "displaying schedule");
    prompter.say(format!("\n{}", team.render_matches()))
}
