use crate::app::ArenaApp;
use crate::model::AVATARS;
use crate::ui::helpers::big_button;
use egui::{CentralPanel, Color32, ComboBox, Context, Grid, RichText, TextEdit};

pub fn ui_setup(app: &mut ArenaApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 480.0;
        let panel_width = (ui.available_width() * 0.9).min(max_width);
        let button_height = 40.0;
        let total_height = 620.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;

        ui.add_space(extra_space);

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("THE KNOWLEDGE ARENA")
                    .size(42.0)
                    .strong()
                    .color(Color32::from_rgb(220, 38, 38)),
            );
            ui.label("Test your knowledge in the ultimate quiz battle");
            ui.add_space(24.0);

            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    // Top 5
                    ui.heading("🏆 LEADERBOARD");
                    if app.leaderboard.is_empty() {
                        ui.label("No scores yet. Be the first!");
                    } else {
                        Grid::new("leaderboard_preview")
                            .striped(true)
                            .num_columns(3)
                            .show(ui, |ui| {
                                for (i, entry) in app.leaderboard.iter().take(5).enumerate() {
                                    ui.label(format!("{}.", i + 1));
                                    ui.label(format!("{} {}", entry.avatar, entry.name));
                                    ui.label(format!("{} pts", entry.score));
                                    ui.end_row();
                                }
                            });
                    }

                    ui.separator();
                    ui.heading("PLAYER SETUP");
                    ui.add_space(6.0);

                    ui.label("NAME");
                    ui.add(
                        TextEdit::singleline(&mut app.name_input)
                            .hint_text("Enter your name")
                            .desired_width(panel_width),
                    );
                    if let Some(best) = app.best_score_for_input() {
                        ui.label(RichText::new(format!("Your best: {best} pts")).small());
                    }

                    ui.add_space(6.0);
                    ComboBox::from_label("AVATAR")
                        .selected_text(app.avatar.clone())
                        .show_ui(ui, |ui| {
                            for avatar in AVATARS {
                                ui.selectable_value(&mut app.avatar, avatar.to_string(), avatar);
                            }
                        });

                    ui.add_space(12.0);
                    if big_button(ui, "START", panel_width, button_height) {
                        app.start_from_form();
                    }
                    ui.add_space(4.0);
                    if big_button(ui, "VIEW LEADERBOARD", panel_width, button_height) {
                        app.show_full_leaderboard = true;
                    }

                    if !app.message.is_empty() {
                        ui.add_space(8.0);
                        ui.colored_label(Color32::RED, app.message.as_str());
                    }
                });
        });
    });
}
