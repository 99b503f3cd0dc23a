use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::data::QuestionBank;
use crate::error::GameError;
use crate::leaderboard::LeaderboardStore;
use crate::model::Question;

// Submódulos
pub mod actions;
pub mod completion;
pub mod planner;
pub mod player;
pub mod queries;
pub mod resets;
pub mod selector;
pub mod view_models;

pub use planner::RoundDescriptor;
pub use player::{AnswerEffect, Player, PowerUps};
pub use selector::RoundPool;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
    RoundComplete,
    Finished,
}

/// Lo que el jugador puede pedir en cada ciclo de render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartGame { name: String, avatar: String },
    SelectOption(usize),
    Advance,
    UseHeal,
    Restart,
}

/// Resultado de la última respuesta, para mostrarlo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected_index: usize,
    pub is_correct: bool,
    pub correct_answer: String,
    pub effect: AnswerEffect,
}

#[derive(Debug, Clone)]
struct ActiveQuestion {
    question: Question,
    outcome: Option<AnswerOutcome>,
}

/// Estado de cada ronda ya visitada: el descriptor es fijo para toda la
/// partida, el pool se puede invalidar.
#[derive(Debug, Clone)]
struct RoundState {
    descriptor: RoundDescriptor,
    pool: Option<RoundPool>,
}

/// Cierre de la partida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEnding {
    pub final_score: u32,
    pub eliminated: bool,
    pub recorded: bool,
    pub leaderboard_warning: Option<String>,
}

/// Partida en curso. Un único jugador por sesión.
#[derive(Debug, Clone)]
struct Session {
    player: Player,
    current_round: usize,
    current_question_index: usize,
    phase: Phase,
    rounds: BTreeMap<usize, RoundState>,
    active: Option<ActiveQuestion>,
    ending: Option<GameEnding>,
}

impl Session {
    fn new(player: Player) -> Self {
        Self {
            player,
            current_round: 1,
            current_question_index: 0,
            phase: Phase::Playing,
            rounds: BTreeMap::new(),
            active: None,
            ending: None,
        }
    }
}

/// Máquina de estados del juego. Sin sesión estamos en `Phase::Setup`.
pub struct Game {
    rules: GameConfig,
    bank: QuestionBank,
    store: LeaderboardStore,
    rng: StdRng,
    session: Option<Session>,
}

impl Game {
    pub fn new(rules: GameConfig, bank: QuestionBank) -> Self {
        Self::with_rng(rules, bank, StdRng::from_entropy())
    }

    /// Igual que [`Game::new`] pero con temas y barajado reproducibles.
    pub fn with_seed(rules: GameConfig, bank: QuestionBank, seed: u64) -> Self {
        Self::with_rng(rules, bank, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rules: GameConfig, bank: QuestionBank, rng: StdRng) -> Self {
        let store = LeaderboardStore::new(&rules.leaderboard_path, rules.leaderboard_capacity);
        Self {
            rules,
            bank,
            store,
            rng,
            session: None,
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<(), GameError> {
        match intent {
            Intent::StartGame { name, avatar } => self.start_game(&name, &avatar),
            Intent::SelectOption(index) => self.submit_answer(index).map(|_| ()),
            Intent::Advance => self.advance(),
            Intent::UseHeal => self.use_heal().map(|_| ()),
            Intent::Restart => {
                self.reset();
                Ok(())
            }
        }
    }

    pub fn rules(&self) -> &GameConfig {
        &self.rules
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn store(&self) -> &LeaderboardStore {
        &self.store
    }
}
