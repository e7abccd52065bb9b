use fencing_atlas::api::{AtlasEngine, AtlasEngineConfig, DataSource};
use fencing_atlas::platform_gtk::GtkAtlasAdapter;
use fencing_atlas::render::CairoRenderer;
use fencing_atlas::telemetry;
use gtk4 as gtk;
use gtk4::prelude::*;

const DEFAULT_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fencing_sample.csv");
const DEFAULT_BOUNDARY: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/states_sample.topojson"
);

fn main() {
    let _ = telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.fencing_atlas.demos.gtk_fencing_atlas")
        .build();
    app.connect_activate(build_ui);
    // GTK parses its own arguments; data paths come from the environment.
    app.run_with_args::<&str>(&[]);
}

fn build_ui(app: &gtk::Application) {
    let config = AtlasEngineConfig::default();
    let engine = match build_engine(config.clone()) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize fencing atlas: {err}");
            return;
        }
    };

    let adapter = GtkAtlasAdapter::new(engine);
    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("US Fencing Participation")
        .default_width(i32::try_from(config.window.width).unwrap_or(1280))
        .default_height(i32::try_from(config.window.height).unwrap_or(1024))
        .child(adapter.widget())
        .build();
    window.present();
}

fn build_engine(
    config: AtlasEngineConfig,
) -> fencing_atlas::AtlasResult<AtlasEngine<CairoRenderer>> {
    let csv = std::env::var("FENCING_ATLAS_CSV").unwrap_or_else(|_| DEFAULT_CSV.to_owned());
    let boundary =
        std::env::var("FENCING_ATLAS_BOUNDARY").unwrap_or_else(|_| DEFAULT_BOUNDARY.to_owned());
    let map = config.map_viewport();
    let renderer = CairoRenderer::new(
        i32::try_from(map.width).unwrap_or(i32::MAX),
        i32::try_from(map.height).unwrap_or(i32::MAX),
    )?;
    AtlasEngine::from_sources(
        renderer,
        config,
        &DataSource::path(csv),
        &DataSource::path(boundary),
    )
}
