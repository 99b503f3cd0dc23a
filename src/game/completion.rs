use log::{error, info};

use super::*;

impl Game {
    /// Cierre de ronda. Eliminado: puntuación final y al leaderboard solo si es
    /// mayor que 0. Superviviente: escudo + curación, y si era la última ronda,
    /// puntuación final y al leaderboard siempre.
    pub(super) fn complete_round(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != Phase::RoundComplete {
            return;
        }

        if session.player.eliminated {
            let score = session.player.finalize_score();
            self.finish(score > 0);
            return;
        }

        session.player.grant_survival_bonus();
        info!(
            "round {} survived by {} (hp {})",
            session.current_round, session.player.name, session.player.hp
        );
        if session.current_round >= self.rules.max_rounds {
            self.finish(true);
        }
    }

    fn finish(&mut self, write_score: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let player = &mut session.player;
        let final_score = player.finalize_score();

        let (recorded, leaderboard_warning) = if write_score {
            match self.store.record(&player.name, final_score, &player.avatar) {
                Ok(_) => (true, None),
                Err(e) => {
                    error!("could not save score for {}: {e}", player.name);
                    (false, Some(format!("Score not saved: {e}")))
                }
            }
        } else {
            (false, None)
        };

        info!(
            "game over for {}: score {final_score}{}",
            player.name,
            if player.eliminated { " (eliminated)" } else { "" }
        );
        session.ending = Some(GameEnding {
            final_score,
            eliminated: player.eliminated,
            recorded,
            leaderboard_warning,
        });
        session.phase = Phase::Finished;
    }
}
