// src/ui/helpers.rs
use crate::view_models::PlayerStatus;
use egui::{Button, Color32, ProgressBar, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Opciones en dos columnas. Devuelve el índice pulsado, si hay alguno.
pub fn option_grid(ui: &mut Ui, options: &[String], width: f32) -> Option<usize> {
    let mut clicked = None;
    let button_w = (width - 8.0) / 2.0;
    for (row, pair) in options.chunks(2).enumerate() {
        ui.horizontal(|ui| {
            for (col, option) in pair.iter().enumerate() {
                if big_button(ui, option, button_w, 40.0) {
                    clicked = Some(row * 2 + col);
                }
            }
        });
        ui.add_space(4.0);
    }
    clicked
}

/// Fila de métricas con etiqueta pequeña encima del valor.
pub fn stat_row(ui: &mut Ui, stats: &[(&str, String)]) {
    ui.columns(stats.len().max(1), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(stats) {
            col.vertical_centered(|ui| {
                ui.label(RichText::new(*label).small());
                ui.label(RichText::new(value).heading().strong());
            });
        }
    });
}

pub fn player_bar(ui: &mut Ui, player: &PlayerStatus) {
    stat_row(
        ui,
        &[
            ("PLAYER", player.label()),
            ("HP", format!("{}/{}", player.hp, player.max_hp)),
            ("XP", player.xp.to_string()),
            ("STREAK", player.streak.to_string()),
        ],
    );

    let color = if player.is_low_hp() {
        Color32::RED
    } else {
        Color32::WHITE
    };
    ui.add(
        ProgressBar::new(player.hp_fraction())
            .fill(color)
            .desired_height(10.0),
    );
    ui.label(format!("🛡 {}  💉 {}", player.shield, player.heal));
}
