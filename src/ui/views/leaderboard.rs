use crate::app::ArenaApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, Grid, RichText, ScrollArea};

pub fn ui_leaderboard(app: &mut ArenaApp, ctx: &Context) {
    centered_panel(ctx, 560.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏆 LEADERBOARD");
            ui.add_space(10.0);

            if app.leaderboard.is_empty() {
                ui.label("No scores recorded yet.");
            } else {
                ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                    Grid::new("leaderboard_full")
                        .striped(true)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("#").strong());
                            ui.label(RichText::new("Player").strong());
                            ui.label(RichText::new("Score").strong());
                            ui.label(RichText::new("Date").strong());
                            ui.end_row();

                            for (i, entry) in app.leaderboard.iter().enumerate() {
                                ui.label((i + 1).to_string());
                                ui.label(format!("{} {}", entry.avatar, entry.name));
                                ui.label(entry.score.to_string());
                                ui.label(entry.date());
                                ui.end_row();
                            }
                        });
                });
            }

            ui.add_space(12.0);
            if big_button(ui, "BACK", 160.0, 36.0) {
                app.show_full_leaderboard = false;
            }
        });
    });
}
