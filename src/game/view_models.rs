use super::*;
use crate::view_models::{GameSnapshot, PlayerStatus, QuestionView, RoundHeader};

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            round: self.round_header(),
            question: self.question_view(),
            outcome: self.last_outcome().cloned(),
            player: self.player_status(),
            ending: self.ending().cloned(),
        }
    }

    pub fn round_header(&self) -> Option<RoundHeader> {
        let round = self.current_descriptor()?;
        Some(RoundHeader {
            number: round.round_number,
            max_rounds: self.rules.max_rounds,
            topic: round.topic.label(),
            difficulty: round.difficulty.label(),
            question_number: self.current_question_index() + 1,
            questions_per_round: self.rules.questions_per_round,
            is_last: self.is_last_round(),
        })
    }

    pub fn question_view(&self) -> Option<QuestionView> {
        let q = self.current_question()?;
        Some(QuestionView {
            text: q.text.clone(),
            options: q.options.clone(),
            answered: self.last_outcome().is_some(),
        })
    }

    pub fn player_status(&self) -> Option<PlayerStatus> {
        let p = self.player()?;
        Some(PlayerStatus {
            name: p.name.clone(),
            avatar: p.avatar.clone(),
            hp: p.hp,
            max_hp: p.max_hp,
            xp: p.xp,
            streak: p.streak,
            shield: p.powerups.shield,
            heal: p.powerups.heal,
            eliminated: p.eliminated,
            final_score: p.final_score(),
        })
    }
}
