use std::fmt;

/// A choice from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateTeam,
    AddPlayer,
    RemovePlayer,
    DisplayTeam,
    ViewPlayerStats,
    UpdatePlayerStat,
    ScheduleMatch,
    RecordResult,
    DisplayMatches,
    WinLossRatio,
    ResetTeam,
    Exit,
}

impl MenuChoice {
    /// Every choice in menu order
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::CreateTeam,
        MenuChoice::AddPlayer,
        MenuChoice::RemovePlayer,
        MenuChoice::DisplayTeam,
        MenuChoice::ViewPlayerStats,
        MenuChoice::UpdatePlayerStat,
        MenuChoice::ScheduleMatch,
        MenuChoice::RecordResult,
        MenuChoice::DisplayMatches,
        MenuChoice::WinLossRatio,
        MenuChoice::ResetTeam,
        MenuChoice::Exit,
    ];

    /// Parses the number typed at the menu prompt
    pub fn parse(raw: &str) -> Option<Self> {
        let number: usize = raw.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Number shown next to the choice
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| choice == self)
            .map_or(0, |index| index + 1)
    }

    /// Whether the choice needs an existing team
    pub fn requires_team(&self) -> bool {
        !matches!(self, MenuChoice::CreateTeam | MenuChoice::Exit)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateTeam => "Create Team",
            MenuChoice::AddPlayer => "Add Player",
            MenuChoice::RemovePlayer => "Remove Player",
            MenuChoice::DisplayTeam => "Display Team",
            MenuChoice::ViewPlayerStats => "View Player Stats",
            MenuChoice::UpdatePlayerStat => "Update Player Stats",
            MenuChoice::ScheduleMatch => "Schedule Match",
            MenuChoice::RecordResult => "Record Match Result",
            MenuChoice::DisplayMatches => "Display Matches",
            MenuChoice::WinLossRatio => "Calculate Win/Loss Ratio",
            MenuChoice::ResetTeam => "Reset Team",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// The full menu text shown before each choice
pub fn render_menu() -> String {
    let mut out = String::from("\n===== Sports Team Management System =====");
    for choice in MenuChoice::ALL {
        out.push('\n');
        out.push_str(&choice.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_numbers_in_order() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::CreateTeam));
        assert_eq!(MenuChoice::parse(" 8 "), Some(MenuChoice::RecordResult));
        assert_eq!(MenuChoice::parse("12"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("13"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("-1"), None);
    }

    #[test]
    fn number_round_trips_through_parse() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }

    #[test]
    fn only_create_and_exit_work_without_a_team() {
        let free: Vec<_> = MenuChoice::ALL
            .iter()
            .filter(|choice| !choice.requires_team())
            .collect();
        assert_eq!(free, vec![&MenuChoice::CreateTeam, &MenuChoice::Exit]);
    }

    #[test]
    fn menu_lists_all_choices() {
        let menu = render_menu();
        assert!(menu.contains("1. Create Team"));
        assert!(menu.contains("10. Calculate Win/Loss Ratio"));
        assert!(menu.contains("12. Exit"));
    }
}
