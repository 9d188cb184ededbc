use std::time::Duration;

const DEFAULT_EXIT_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings for the interactive shell
///
/// Read from the process environment after loading an optional `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pause after the goodbye message on exit
    pub exit_delay: Duration,
    /// Filter directive used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads settings from the environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup
    ///
    /// Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let exit_delay = match lookup("ROSTER_EXIT_DELAY_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!("ROSTER_EXIT_DELAY_MS={:?} is not a number, using default", raw);
                    defaults.exit_delay
                }
            },
            None => defaults.exit_delay,
        };

        let log_level = lookup("ROSTER_LOG_LEVEL")
            .map(|raw| raw.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.log_level);

        Self {
            exit_delay,
            log_level,
        }
    }

    /// Config with no exit pause, for scripted sessions
    pub fn immediate() -> Self {
        Self {
            exit_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.exit_delay, Duration::from_secs(1));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROSTER_EXIT_DELAY_MS", "250"),
            ("ROSTER_LOG_LEVEL", "team_roster=debug"),
        ]));

        assert_eq!(config.exit_delay, Duration::from_millis(250));
        assert_eq!(config.log_level, "team_roster=debug");
    }

    #[test]
    fn invalid_delay_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("ROSTER_EXIT_DELAY_MS", "soon")]));
        assert_eq!(config.exit_delay, Duration::from_millis(DEFAULT_EXIT_DELAY_MS));
    }

    #[test]
    fn blank_log_level_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("ROSTER_LOG_LEVEL", "  ")]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn immediate_has_no_delay() {
        assert_eq!(Config::immediate().exit_delay, Duration::ZERO);
    }
}
