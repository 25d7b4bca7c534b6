use collage_builder::{AppConfig, CollageBuilderApp};

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env();
    let title = config.window_title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 820.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(CollageBuilderApp::new(cc, config)))),
    )
}
