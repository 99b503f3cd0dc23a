use crate::app::ArenaApp;
use crate::ui::helpers::{big_button, stat_row};
use crate::ui::layout::centered_panel;
use crate::view_models::{GameSnapshot, verdict};
use egui::{Color32, Context, RichText};

pub fn ui_results(app: &mut ArenaApp, ctx: &Context, snapshot: &GameSnapshot) {
    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            let Some(ending) = &snapshot.ending else {
                ui.label("No results.");
                return;
            };

            if ending.eliminated {
                ui.label(
                    RichText::new("ELIMINATED")
                        .size(32.0)
                        .strong()
                        .color(Color32::RED),
                );
            } else {
                ui.label(
                    RichText::new("FINAL RESULTS")
                        .size(32.0)
                        .strong()
                        .color(Color32::GOLD),
                );
            }
            ui.add_space(12.0);

            if let Some(player) = &snapshot.player {
                ui.label(RichText::new(player.label()).heading());
                stat_row(
                    ui,
                    &[
                        ("SCORE", ending.final_score.to_string()),
                        ("XP", player.xp.to_string()),
                        ("HP", format!("{}/{}", player.hp, player.max_hp)),
                    ],
                );
                ui.add_space(8.0);
                if !ending.eliminated {
                    ui.label(RichText::new(verdict(ending.final_score)).heading());
                }
                if ending.recorded {
                    ui.label(format!(
                        "✅ {}'s score ({}) saved to the leaderboard",
                        player.name, ending.final_score
                    ));
                }
            }

            if let Some(warning) = &ending.leaderboard_warning {
                ui.colored_label(Color32::YELLOW, format!("⚠ {warning}"));
            }

            ui.add_space(16.0);
            let label = if ending.eliminated { "TRY AGAIN" } else { "PLAY AGAIN" };
            if big_button(ui, label, 200.0, 40.0) {
                app.restart();
            }
        });
    });
}
