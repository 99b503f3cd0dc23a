// src/config.rs

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const MAX_ROUNDS: usize = 100;
const MAX_QUESTIONS_PER_ROUND: usize = 100;
const MAX_POINTS: u32 = 100_000;

/// Reglas de la partida y rutas de ficheros. Todo campo ausente en el YAML
/// toma su valor por defecto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub max_rounds: usize,
    pub questions_per_round: usize,
    pub max_hp: u32,
    pub xp_per_correct: u32,
    pub damage_per_miss: u32,
    pub combo_threshold: u32,
    pub combo_heal: u32,
    pub heal_powerup: u32,
    pub leaderboard_capacity: usize,
    /// `None` usa el banco embebido.
    pub questions_path: Option<PathBuf>,
    pub leaderboard_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            questions_per_round: 5,
            max_hp: 100,
            xp_per_correct: 10,
            damage_per_miss: 20,
            combo_threshold: 3,
            combo_heal: 15,
            heal_powerup: 20,
            leaderboard_capacity: 10,
            questions_path: None,
            leaderboard_path: PathBuf::from("leaderboard.json"),
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Sin fichero se juega con los valores por defecto; un fichero roto
    /// también, pero se avisa en el log.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("config loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (self.max_rounds >= 1, "max_rounds must be at least 1"),
            (self.questions_per_round >= 1, "questions_per_round must be at least 1"),
            (self.max_hp >= 1, "max_hp must be at least 1"),
            (self.combo_threshold >= 1, "combo_threshold must be at least 1"),
            (self.leaderboard_capacity >= 1, "leaderboard_capacity must be at least 1"),
            // Techos para que xp + 2*hp quepa en u32 en cualquier partida
            (self.max_rounds <= MAX_ROUNDS, "max_rounds is too large"),
            (
                self.questions_per_round <= MAX_QUESTIONS_PER_ROUND,
                "questions_per_round is too large",
            ),
            (self.max_hp <= MAX_POINTS, "max_hp is too large"),
            (self.xp_per_correct <= MAX_POINTS, "xp_per_correct is too large"),
            (self.damage_per_miss <= MAX_POINTS, "damage_per_miss is too large"),
            (self.combo_heal <= MAX_POINTS, "combo_heal is too large"),
            (self.heal_powerup <= MAX_POINTS, "heal_powerup is too large"),
        ];
        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(ConfigError::Invalid((*msg).to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_rules() {
        let c = GameConfig::default();
        assert_eq!(c.max_rounds, 3);
        assert_eq!(c.questions_per_round, 5);
        assert_eq!(c.max_hp, 100);
        assert_eq!(c.damage_per_miss, 20);
        assert_eq!(c.combo_heal, 15);
        assert_eq!(c.leaderboard_capacity, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let c = GameConfig::from_yaml_str("questions_per_round: 2\nleaderboard_path: scores.json\n")
            .unwrap();
        assert_eq!(c.questions_per_round, 2);
        assert_eq!(c.leaderboard_path, PathBuf::from("scores.json"));
        assert_eq!(c.max_rounds, 3);
    }

    #[test]
    fn zero_questions_per_round_is_rejected() {
        let err = GameConfig::from_yaml_str("questions_per_round: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn oversized_values_are_rejected() {
        let err = GameConfig::from_yaml_str("max_hp: 3000000000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("max_hp")));
        let err = GameConfig::from_yaml_str("xp_per_correct: 4000000000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(GameConfig::from_yaml_str("questions_per_round: 101\n").is_err());

        // El peor caso admitido sigue cabiendo en u32
        let c = GameConfig::from_yaml_str(
            "max_rounds: 100\nquestions_per_round: 100\nmax_hp: 100000\nxp_per_correct: 100000\n",
        )
        .unwrap();
        let worst = (c.max_rounds * c.questions_per_round) as u64 * c.xp_per_correct as u64
            + 2 * c.max_hp as u64;
        assert!(worst <= u32::MAX as u64);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.yaml");
        std::fs::write(&path, "max_rounds: [oops").unwrap();
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
        assert_eq!(
            GameConfig::load_or_default(&dir.path().join("missing.yaml")),
            GameConfig::default()
        );
    }
}
