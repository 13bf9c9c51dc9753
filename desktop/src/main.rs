mod app;
mod net;

use app::DesktopApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Freshscan",
        options,
        Box::new(|_cc| Box::new(DesktopApp::default())),
    )
}
