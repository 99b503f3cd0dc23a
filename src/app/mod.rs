use std::path::PathBuf;

use crate::config::GameConfig;
use crate::data::QuestionBank;
use crate::error::QuestionBankError;
use crate::game::Game;
use crate::leaderboard::LeaderboardEntry;
use crate::model::AVATARS;

// Submódulos
pub mod actions;

/// Envoltorio de la partida para la UI: el juego más el estado propio de la
/// pantalla (formulario, mensajes, tabla cacheada).
pub struct ArenaApp {
    pub game: Game,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub name_input: String,
    pub avatar: String,
    pub show_full_leaderboard: bool,
    pub message: String,
    /// Banco inválido o ausente: no se puede empezar hasta recargarlo.
    pub bank_error: Option<String>,
    /// Ronda sin preguntas suficientes: solo queda reiniciar.
    pub round_error: Option<String>,
    questions_path: Option<PathBuf>,
}

impl ArenaApp {
    pub fn new(config: GameConfig) -> Self {
        let bank = QuestionBank::load_from(config.questions_path.as_deref());
        let questions_path = config.questions_path.clone();
        Self::from_bank(Game::new(config, QuestionBank::default()), bank, questions_path)
    }

    /// Construye la app con un resultado de carga ya resuelto. Un banco
    /// rechazado se sustituye por uno vacío.
    pub fn from_bank(
        mut game: Game,
        bank: Result<QuestionBank, QuestionBankError>,
        questions_path: Option<PathBuf>,
    ) -> Self {
        let bank_error = match bank {
            Ok(bank) => {
                game.replace_bank(bank);
                None
            }
            Err(e) => {
                game.replace_bank(QuestionBank::default());
                Some(e.to_string())
            }
        };
        let leaderboard = game.store().load();

        Self {
            game,
            leaderboard,
            name_input: String::new(),
            avatar: AVATARS[0].to_string(),
            show_full_leaderboard: false,
            message: String::new(),
            bank_error,
            round_error: None,
            questions_path,
        }
    }

    pub fn questions_path(&self) -> Option<&std::path::Path> {
        self.questions_path.as_deref()
    }

    /// Hay algo que impide jugar y hay que mostrarlo como bloqueo.
    pub fn blocking_error(&self) -> Option<&str> {
        self.bank_error.as_deref().or(self.round_error.as_deref())
    }
}
