use crate::app::ArenaApp;
use crate::ui::helpers::{big_button, stat_row};
use crate::ui::layout::centered_panel;
use crate::view_models::GameSnapshot;
use egui::{Color32, Context, RichText};

pub fn ui_round_summary(app: &mut ArenaApp, ctx: &Context, snapshot: &GameSnapshot) {
    centered_panel(ctx, 360.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            let number = snapshot.round.as_ref().map_or(0, |r| r.number);
            ui.label(
                RichText::new(format!("ROUND {number} COMPLETE"))
                    .size(28.0)
                    .strong()
                    .color(Color32::GREEN),
            );
            ui.label("+1 🛡 shield  +1 💉 heal");
            ui.add_space(12.0);

            if let Some(player) = &snapshot.player {
                stat_row(
                    ui,
                    &[
                        ("HP", format!("{}/{}", player.hp, player.max_hp)),
                        ("XP", player.xp.to_string()),
                        ("STREAK", player.streak.to_string()),
                    ],
                );
            }

            ui.add_space(16.0);
            if big_button(ui, "NEXT ROUND", 200.0, 40.0) {
                app.next();
            }
            if !app.message.is_empty() {
                ui.label(app.message.as_str());
            }
        });
    });
}
