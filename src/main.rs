//! Headless VolkCell runner: measures the files given on the command line
//! and prints the batch table along with the session's palette and library.

use std::process::ExitCode;

use volkcell::batch::{self, RandomSource};
use volkcell::config::LogLevel;
use volkcell::data;
use volkcell::{AppConfig, SessionStore, Studio};

fn main() -> ExitCode {
    // Install the logger before loading the config so load failures are
    // reported; the configured level applies unless RUST_LOG is set
    let env_override = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !env_override {
        log::set_max_level(LogLevel::default().to_level_filter());
    }

    let config = AppConfig::load_from_default_path();
    if !env_override {
        log::set_max_level(config.preferences.log_level.to_level_filter());
    }

    let files: Vec<String> = std::env::args().skip(1).collect();
    let mut store = SessionStore::from_config(&config);
    let studio = Studio::with_brush_size(config.preferences.brush_size);

    // The first training image becomes the studio canvas
    let canvas = data::canvas_for_uploads(&files);
    let mask = studio.predict(&canvas);
    log::debug!("Prediction mask: {}x{}", mask.width(), mask.height());

    let session = store.get_or_init();
    println!("Palette:");
    for class in session.classes.list() {
        println!("  {:<12} {}", class.name, class.color);
    }
    println!(
        "Stroke: {} (brush {})",
        studio.stroke_color(&session.classes),
        studio.brush_size()
    );

    let model = session.model_names().next().map(str::to_string);
    let ran = batch::run_into_session(
        &mut store,
        model.as_deref(),
        &files,
        &mut RandomSource::new(),
        |p| log::debug!("Progress: {:.0}%", p * 100.0),
    );
    if !ran {
        println!("Please upload files first.");
    }

    let session = store.get_or_init();
    match &session.batch_result {
        Some(result) => print!("\nResults:\n{}", result),
        None => println!("No data available. Run an analysis first."),
    }

    println!("\nLibrary:");
    for model in &session.models {
        println!(
            "  {} by {} [{}] {}",
            model.name, model.author, model.kind, model.accuracy
        );
    }

    ExitCode::SUCCESS
}
