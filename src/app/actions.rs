use log::warn;

use super::*;
use crate::error::GameError;
use crate::game::{Intent, Phase};
use crate::leaderboard::best_in;

impl ArenaApp {
    /// Único punto por el que la UI modifica la partida.
    pub fn apply(&mut self, intent: Intent) {
        let restarting = matches!(intent, Intent::Restart);
        match self.game.dispatch(intent) {
            Ok(()) => {
                self.message.clear();
                if restarting {
                    self.round_error = None;
                }
            }
            Err(e @ (GameError::InsufficientPool { .. } | GameError::NoQuestions)) => {
                warn!("round cannot start: {e}");
                self.round_error = Some(e.to_string());
            }
            Err(e) => {
                warn!("rejected action: {e}");
                self.message = e.to_string();
            }
        }

        if restarting || self.game.phase() == Phase::Finished {
            self.refresh_leaderboard();
        }
    }

    pub fn start_from_form(&mut self) {
        if self.bank_error.is_some() {
            return;
        }
        self.round_error = None;
        let intent = Intent::StartGame {
            name: self.name_input.clone(),
            avatar: self.avatar.clone(),
        };
        self.apply(intent);
    }

    pub fn choose_option(&mut self, index: usize) {
        self.apply(Intent::SelectOption(index));
    }

    pub fn next(&mut self) {
        self.apply(Intent::Advance);
    }

    pub fn restart(&mut self) {
        self.apply(Intent::Restart);
    }

    pub fn use_heal(&mut self) {
        let before = self.game.player().map(|p| p.hp).unwrap_or(0);
        self.apply(Intent::UseHeal);
        if self.message.is_empty() {
            let healed = self.game.player().map(|p| p.hp).unwrap_or(0).saturating_sub(before);
            self.message = format!("💉 Healed +{healed} HP");
        }
    }

    /// Vuelve a leer el banco de preguntas; la partida en curso se descarta.
    pub fn reload_questions(&mut self) {
        match QuestionBank::load_from(self.questions_path.as_deref()) {
            Ok(bank) => {
                self.game.replace_bank(bank);
                self.bank_error = None;
                self.message = format!("{} questions loaded", self.game.bank().len());
            }
            Err(e) => {
                self.game.replace_bank(QuestionBank::default());
                self.bank_error = Some(e.to_string());
            }
        }
        self.round_error = None;
    }

    pub fn refresh_leaderboard(&mut self) {
        self.leaderboard = self.game.store().load();
    }

    /// Mejor marca del nombre escrito en el formulario.
    pub fn best_score_for_input(&self) -> Option<u32> {
        if self.name_input.trim().is_empty() {
            return None;
        }
        best_in(&self.leaderboard, &self.name_input).map(|e| e.score)
    }
}
