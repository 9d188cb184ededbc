// Menu handlers
// One function per menu choice; each prompts for its own input and prints feedback

pub mod matches;
pub mod players;
pub mod teams;

use crate::domain::team::TeamEvent;

/// Records a successful team mutation in the log
pub(crate) fn log_event(event: &TeamEvent) {
    tracing::info!(
        team = %event.team_name(),
        event = event.label(),
        at = %event.occurred_at(),
        "team updated"
    );
}
