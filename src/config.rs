use serde::Deserialize;
use web_time::Duration;

use crate::types::Player;

const DEFAULT_THINK_DELAY_MS: u64 = 1000;

/// Engine settings supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay between scheduling and committing an automated move.
    pub think_delay_ms: u64,
    /// Side played by the automated opponent in `HumanVsComputer` mode.
    pub computer_side: Player,
}

impl EngineConfig {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            computer_side: Player::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"think_delay_ms":250}"#).unwrap();

        assert_eq!(config.think_delay(), Duration::from_millis(250));
        assert_eq!(config.computer_side, Player::White);
    }

    #[test]
    fn computer_side_accepts_snake_case_names() {
        let config: EngineConfig = serde_json::from_str(r#"{"computer_side":"black"}"#).unwrap();

        assert_eq!(config.computer_side, Player::Black);
        assert_eq!(config.think_delay_ms, DEFAULT_THINK_DELAY_MS);
    }
}
