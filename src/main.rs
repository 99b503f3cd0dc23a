use std::path::PathBuf;

use knowledge_arena::ArenaApp;
use knowledge_arena::config::GameConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    // Configuración opcional; ARENA_CONFIG permite apuntar a otro fichero
    let config_path = std::env::var_os("ARENA_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("arena.yaml"));
    let config = GameConfig::load_or_default(&config_path);

    let app = ArenaApp::new(config);
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "The Knowledge Arena",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
