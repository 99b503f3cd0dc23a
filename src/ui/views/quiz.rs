use crate::app::ArenaApp;
use crate::game::AnswerEffect;
use crate::ui::helpers::{big_button, option_grid, player_bar};
use crate::ui::layout::centered_panel;
use crate::view_models::GameSnapshot;
use egui::{Color32, Context, RichText};

pub fn ui_quiz(app: &mut ArenaApp, ctx: &Context, snapshot: &GameSnapshot) {
    centered_panel(ctx, 520.0, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            if let Some(round) = &snapshot.round {
                ui.heading(round.title());
                ui.label(RichText::new(round.progress()).small());
                if round.is_last {
                    ui.label(RichText::new("FINAL ROUND").color(Color32::GOLD));
                }
            }
            ui.separator();

            // Ronda sin pregunta cargada: no hay nada que responder
            let Some(question) = &snapshot.question else {
                ui.label("No question available.");
                return;
            };

            ui.add_space(8.0);
            ui.label(RichText::new(&question.text).heading().strong());
            ui.add_space(12.0);

            if let Some(outcome) = &snapshot.outcome {
                if outcome.is_correct {
                    ui.colored_label(Color32::GREEN, RichText::new("✓ Correct!").heading());
                } else {
                    ui.colored_label(Color32::RED, RichText::new("✗ Wrong!").heading());
                }
                match &outcome.effect {
                    AnswerEffect::Rewarded { xp, combo_heal } => {
                        ui.label(format!("+{xp} XP"));
                        if let Some(heal) = combo_heal {
                            ui.label(format!("🔥 Combo heal! +{heal} HP"));
                        }
                    }
                    AnswerEffect::Shielded => {
                        ui.label("🛡 Your shield absorbed the hit");
                    }
                    AnswerEffect::Damaged { amount, eliminated } => {
                        ui.label(format!("-{amount} HP"));
                        if *eliminated {
                            ui.colored_label(Color32::RED, "You have been eliminated");
                        }
                    }
                }
                ui.label(format!("Correct answer: {}", outcome.correct_answer));
                ui.add_space(8.0);
                if big_button(ui, "NEXT", 160.0, 36.0) {
                    app.next();
                }
            } else {
                let width = ui.available_width();
                if let Some(index) = option_grid(ui, &question.options, width) {
                    app.choose_option(index);
                }
            }

            ui.add_space(8.0);
            ui.separator();

            if let Some(player) = &snapshot.player {
                player_bar(ui, player);
                if player.heal > 0 && !player.eliminated && ui.button("💉 Use heal").clicked() {
                    app.use_heal();
                }
            }

            if !app.message.is_empty() {
                ui.add_space(6.0);
                ui.label(app.message.as_str());
            }
        });
    });
}
