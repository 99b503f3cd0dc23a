// src/leaderboard.rs

use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub avatar: String,
    #[serde(alias = "date")]
    pub timestamp: String,
}

impl LeaderboardEntry {
    pub fn new(name: &str, score: u32, avatar: &str) -> Self {
        Self {
            name: name.to_string(),
            score,
            avatar: avatar.to_string(),
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Solo la fecha (`YYYY-MM-DD`) del timestamp.
    pub fn date(&self) -> &str {
        self.timestamp.get(..10).unwrap_or(&self.timestamp)
    }
}

/// Añade, ordena de mayor a menor y recorta. El orden es estable: en caso de
/// empate se respeta el orden de inserción.
pub fn merge_entry(
    mut table: Vec<LeaderboardEntry>,
    entry: LeaderboardEntry,
    capacity: usize,
) -> Vec<LeaderboardEntry> {
    table.push(entry);
    table.sort_by(|a, b| b.score.cmp(&a.score));
    table.truncate(capacity);
    table
}

/// Tabla de mejores puntuaciones persistida en JSON.
/// Asume un único escritor: load → modificar → guardar sin bloqueo.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
    capacity: usize,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    /// Un fichero ausente o corrupto es una tabla vacía, nunca un error.
    pub fn load(&self) -> Vec<LeaderboardEntry> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no leaderboard at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("could not read leaderboard {}: {e}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<LeaderboardEntry>>(&text) {
            Ok(mut table) => {
                table.sort_by(|a, b| b.score.cmp(&a.score));
                table.truncate(self.capacity);
                table
            }
            Err(e) => {
                warn!("leaderboard {} is corrupt, starting empty: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    pub fn record(
        &self,
        name: &str,
        score: u32,
        avatar: &str,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let table = merge_entry(
            self.load(),
            LeaderboardEntry::new(name, score, avatar),
            self.capacity,
        );
        self.save(&table)?;
        Ok(table)
    }

    fn save(&self, table: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string_pretty(table)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Mejor puntuación registrada para un nombre, sin distinguir mayúsculas.
pub fn best_in<'a>(table: &'a [LeaderboardEntry], name: &str) -> Option<&'a LeaderboardEntry> {
    let wanted = name.trim().to_lowercase();
    table
        .iter()
        .filter(|e| e.name.to_lowercase() == wanted)
        .max_by_key(|e| e.score)
}
