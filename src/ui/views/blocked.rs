use crate::app::ArenaApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

/// Pantalla de bloqueo: banco inválido o ronda sin preguntas suficientes.
pub fn ui_blocked(app: &mut ArenaApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("THE ARENA IS CLOSED")
                    .size(28.0)
                    .strong()
                    .color(Color32::RED),
            );
            ui.add_space(10.0);
            if let Some(error) = app.blocking_error() {
                ui.label(error.to_owned());
            }
            ui.add_space(16.0);

            if app.bank_error.is_some() {
                let source = app
                    .questions_path()
                    .map_or_else(|| "embedded questions".to_owned(), |p| p.display().to_string());
                ui.label(RichText::new(source).small());
                if big_button(ui, "RELOAD QUESTIONS", 220.0, 40.0) {
                    app.reload_questions();
                }
            } else if big_button(ui, "BACK TO SETUP", 220.0, 40.0) {
                app.restart();
            }
        });
    });
}
