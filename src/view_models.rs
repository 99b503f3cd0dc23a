// src/view_models.rs

use crate::game::{AnswerOutcome, GameEnding, Phase};

/// Foto de solo lectura que consume la capa de render en cada ciclo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub round: Option<RoundHeader>,
    pub question: Option<QuestionView>,
    pub outcome: Option<AnswerOutcome>,
    pub player: Option<PlayerStatus>,
    pub ending: Option<GameEnding>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundHeader {
    pub number: usize,
    pub max_rounds: usize,
    pub topic: &'static str,
    pub difficulty: &'static str,
    pub question_number: usize, // 1-based
    pub questions_per_round: usize,
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    pub options: Vec<String>,
    pub answered: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerStatus {
    pub name: String,
    pub avatar: String,
    pub hp: u32,
    pub max_hp: u32,
    pub xp: u32,
    pub streak: u32,
    pub shield: u32,
    pub heal: u32,
    pub eliminated: bool,
    pub final_score: Option<u32>,
}

impl RoundHeader {
    pub fn title(&self) -> String {
        format!("Round {} - {} ({})", self.number, self.topic, self.difficulty)
    }

    pub fn progress(&self) -> String {
        format!("Question {} / {}", self.question_number, self.questions_per_round)
    }
}

impl PlayerStatus {
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f32 / self.max_hp as f32
    }

    pub fn is_low_hp(&self) -> bool {
        self.hp_fraction() < 0.5
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.avatar, self.name)
    }
}

/// Mensaje final según la puntuación.
pub fn verdict(score: u32) -> &'static str {
    if score >= 200 {
        "Outstanding!"
    } else if score >= 150 {
        "Great work!"
    } else {
        "Keep practicing!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_thresholds() {
        assert_eq!(verdict(250), "Outstanding!");
        assert_eq!(verdict(200), "Outstanding!");
        assert_eq!(verdict(150), "Great work!");
        assert_eq!(verdict(149), "Keep practicing!");
    }

    #[test]
    fn hp_below_half_is_low() {
        let mut status = PlayerStatus {
            name: "Ana".into(),
            avatar: "⚡".into(),
            hp: 50,
            max_hp: 100,
            xp: 0,
            streak: 0,
            shield: 0,
            heal: 0,
            eliminated: false,
            final_score: None,
        };
        assert!(!status.is_low_hp());
        status.hp = 40;
        assert!(status.is_low_hp());
        assert_eq!(status.label(), "⚡ Ana");
    }
}
