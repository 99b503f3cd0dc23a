use log::info;

use super::*;

impl Game {
    /// Descarta jugador, rondas y pools de golpe y vuelve a `Setup`.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            info!("game reset");
        }
    }

    /// Sustituye el banco (p. ej. tras corregir el fichero) y reinicia la partida.
    pub fn replace_bank(&mut self, bank: QuestionBank) {
        self.bank = bank;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::synthetic_bank;
    use crate::game::tests::{right_option, test_game};

    #[test]
    fn reset_clears_rounds_and_player() {
        let (mut game, _dir) = test_game(5);
        game.start_game("Ana", "⚡").unwrap();
        let choice = right_option(&game);
        game.submit_answer(choice).unwrap();
        assert!(game.round_descriptor(1).is_some());
        assert!(game.round_pool(1).is_some());

        game.reset();
        assert_eq!(game.phase(), Phase::Setup);
        assert!(game.player().is_none());
        assert!(game.round_descriptor(1).is_none());
        assert!(game.round_pool(1).is_none());
        assert!(game.last_outcome().is_none());

        game.start_game("Bo", "🔥").unwrap();
        let p = game.player().unwrap();
        assert_eq!((p.name.as_str(), p.hp, p.xp), ("Bo", 100, 0));
        assert_eq!(game.current_round(), 1);
    }

    #[test]
    fn replacing_the_bank_unblocks_a_start() {
        let (mut game, _dir) = test_game(2);
        assert!(game.start_game("Ana", "⚡").is_err());
        game.replace_bank(synthetic_bank(5));
        assert!(game.start_game("Ana", "⚡").is_ok());
        assert_eq!(game.bank().len(), 60);
    }
}
