mod helpers;
pub mod layout;
pub mod views;

use crate::app::ArenaApp;
use crate::game::Phase;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for ArenaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE REINICIAR (solo con partida en marcha)
        if self.game.phase() != Phase::Setup {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        if self.blocking_error().is_some() {
            views::blocked::ui_blocked(self, ctx);
            return;
        }

        // Dispatch por fase
        let snapshot = self.game.snapshot();
        match snapshot.phase {
            Phase::Setup if self.show_full_leaderboard => {
                views::leaderboard::ui_leaderboard(self, ctx)
            }
            Phase::Setup => views::setup::ui_setup(self, ctx),
            Phase::Playing => views::quiz::ui_quiz(self, ctx, &snapshot),
            Phase::RoundComplete => views::round_summary::ui_round_summary(self, ctx, &snapshot),
            Phase::Finished => views::results::ui_results(self, ctx, &snapshot),
        }
    }
}
