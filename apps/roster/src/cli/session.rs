use std::io::{BufRead, Write};

use super::errors::{CliError, CliResult};
use super::handlers::{matches, players, teams};
use super::menu::{render_menu, MenuChoice};
use super::prompt::Prompter;
use crate::config::Config;
use crate::domain::team::Team;

/// Whether the loop should keep going after a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session: at most one team, owned by the control loop
pub struct Session {
    config: Config,
    team: Option<Team>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config, team: None }
    }

    /// The team created in this session, if any
    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    /// Shows the menu and dispatches choices until Exit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> CliResult<()> {
        tracing::info!("session started");

        loop {
            match self.step(prompter) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CliError::InputClosed) => {
                    tracing::info!("input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    fn step<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> CliResult<Flow> {
        prompter.say(render_menu())?;
        let raw = prompter.ask("\nEnter your choice: ")?;

        let Some(choice) = MenuChoice::parse(&raw) else {
            tracing::debug!(input = %raw.trim(), "unknown menu choice");
            prompter.say("Invalid choice, please try again.")?;
            return Ok(Flow::Continue);
        };
        tracing::debug!(choice = ?choice, "menu choice");

        if choice == MenuChoice::Exit {
            prompter.say("\nExiting the system... Goodbye!\n")?;
            std::thread::sleep(self.config.exit_delay);
            return Ok(Flow::Exit);
        }

        if choice == MenuChoice::CreateTeam {
            teams::create_team(&mut self.team, prompter)?;
            return Ok(Flow::Continue);
        }

        let Some(team) = self.team.as_mut() else {
            prompter.say("Please create a team first.")?;
            return Ok(Flow::Continue);
        };

        match choice {
            MenuChoice::AddPlayer => players::add_player(team, prompter)?,
            MenuChoice::RemovePlayer => players::remove_player(team, prompter)?,
            MenuChoice::DisplayTeam => teams::display_team(team, prompter)?,
            MenuChoice::ViewPlayerStats => players::view_player_stats(team, prompter)?,
            MenuChoice::UpdatePlayerStat => players::update_player_stat(team, prompter)?,
            MenuChoice::ScheduleMatch => matches::schedule_match(team, prompter)?,
            MenuChoice::RecordResult => matches::record_result(team, prompter)?,
            MenuChoice::DisplayMatches => matches::display_matches(team, prompter)?,
            MenuChoice::WinLossRatio => teams::win_loss_ratio(team, prompter)?,
            MenuChoice::ResetTeam => teams::reset_team(team, prompter)?,
            MenuChoice::CreateTeam | MenuChoice::Exit => {}
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(input: &str) -> (Session, String) {
        let mut session = Session::new(Config::immediate());
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        session.run(&mut prompter).unwrap();
        let out = String::from_utf8(prompter.into_inner().1).unwrap();
        (session, out)
    }

    #[test]
    fn exit_ends_the_loop() {
        let (session, out) = run_script("12\n1\nNever\n");

        assert!(out.contains("Goodbye!"));
        assert!(session.team().is_none());
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        let (session, out) = run_script("1\ncity\n");

        assert!(out.contains("Team 'City' created successfully!"));
        assert_eq!(session.team().unwrap().name(), "City");
    }

    #[test]
    fn team_operations_need_a_team() {
        for choice in MenuChoice::ALL.iter().filter(|c| c.requires_team()) {
            let (_, out) = run_script(&format!("{}\n", choice.number()));
            assert!(
                out.contains("Please create a team first."),
                "choice {} should need a team",
                choice
            );
        }
    }

    #[test]
    fn invalid_choice_is_reported() {
        let (_, out) = run_script("99\nabc\n12\n");
        assert_eq!(out.matches("Invalid choice, please try again.").count(), 2);
    }

    #[test]
    fn creating_again_replaces_the_team() {
        let (session, _) = run_script("1\nCity\n2\nAnn\n20\nWing\n1\nRovers\n");
        let team = session.team().unwrap();

        assert_eq!(team.name(), "Rovers");
        assert!(team.players().is_empty());
    }
}
