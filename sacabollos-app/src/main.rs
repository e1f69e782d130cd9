use anyhow::Context;
use sacabollos::{
    prelude::{Dataset, DirectoryConfig, ViewCoordinator},
    ui::widget::DirectoryWidget,
};

/// Standalone directory viewer application.
///
/// Usage: `sacabollos-app [entities.json] [config.json]`. Without arguments
/// the built-in demo listings and default map settings are used.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let dataset = match args.next() {
        Some(path) => Dataset::from_path(&path)
            .with_context(|| format!("failed to load entities from {path}"))?,
        None => Dataset::mock(),
    };
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {path}"))?;
            DirectoryConfig::from_json_str(&json)?
        }
        None => DirectoryConfig::default(),
    };

    log::info!("starting with {} listings", dataset.len());
    let coordinator = ViewCoordinator::new(dataset, &config).context("invalid viewer configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("SacaBollos.eu"),
        ..Default::default()
    };

    eframe::run_native(
        "sacabollos-app",
        options,
        Box::new(move |_cc| Box::new(DirectoryApp::new(coordinator))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    Ok(())
}

/// The main application struct
struct DirectoryApp {
    coordinator: ViewCoordinator,
    widget: DirectoryWidget,
}

impl DirectoryApp {
    fn new(coordinator: ViewCoordinator) -> Self {
        Self {
            coordinator,
            widget: DirectoryWidget::new(),
        }
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("SacaBollos.eu");
                ui.label("Conectamos profesionales de reparación de abollones");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} / {} visibles",
                        self.coordinator.visible_count(),
                        self.coordinator.entities().len()
                    ));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.widget.show(ui, &mut self.coordinator);
        });
    }
}
