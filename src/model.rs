use serde::{Deserialize, Serialize};

/// Avatares disponibles en la pantalla de inicio.
pub const AVATARS: [&str; 8] = ["⚔️", "🛡️", "🏹", "🗡️", "⚡", "🔥", "❄️", "🌟"];

/// Devuelve el avatar si está en [`AVATARS`]; si no, el primero.
pub fn normalize_avatar(avatar: &str) -> &'static str {
    AVATARS
        .iter()
        .copied()
        .find(|a| *a == avatar)
        .unwrap_or(AVATARS[0])
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Ronda 1 fácil, ronda 2 media, a partir de ahí siempre difícil.
    pub fn for_round(round_number: usize) -> Self {
        match round_number {
            0 | 1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Topic {
    HollywoodBollywood,
    HistoryGk,
    Sports,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::HollywoodBollywood, Topic::HistoryGk, Topic::Sports];

    pub fn label(self) -> &'static str {
        match self {
            Topic::HollywoodBollywood => "Hollywood/Bollywood",
            Topic::HistoryGk => "History/GK",
            Topic::Sports => "Sports",
        }
    }

    /// Categorías del banco que alimentan una ronda con este tema.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Topic::HollywoodBollywood => &["Hollywood", "Bollywood"],
            Topic::HistoryGk => &["History"],
            Topic::Sports => &["Sports"],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(alias = "answer_index")]
    pub correct_option_index: usize,
    pub category: String,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option_index
    }

    pub fn correct_answer(&self) -> &str {
        self.options
            .get(self.correct_option_index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
