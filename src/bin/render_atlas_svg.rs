use std::fs;
use std::path::{Path, PathBuf};

use fencing_atlas::api::{AtlasEngine, AtlasEngineConfig, DataSource};
use fencing_atlas::core::{Attribute, SurfaceKind};
use fencing_atlas::render::SvgRenderer;
use fencing_atlas::telemetry;

const USAGE: &str = "Usage: cargo run --bin render_atlas_svg -- --csv <path> --boundary <path> \
[--attribute <label>] [--out-dir <dir>] [--snapshot <path>] [--config <path>]";

#[derive(Debug)]
struct CliArgs {
    csv: PathBuf,
    boundary: PathBuf,
    attribute: Option<String>,
    out_dir: PathBuf,
    snapshot: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            AtlasEngineConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => AtlasEngineConfig::default(),
    };

    let mut engine = AtlasEngine::from_sources(
        SvgRenderer::default(),
        config,
        &DataSource::path(&args.csv),
        &DataSource::path(&args.boundary),
    )
    .map_err(|err| err.to_string())?;

    if let Some(label) = &args.attribute {
        let attribute: Attribute = label.parse().map_err(|err| format!("{err}"))?;
        engine.set_attribute(attribute).map_err(|err| err.to_string())?;
        engine.finish_transitions().map_err(|err| err.to_string())?;
    }
    engine.render().map_err(|err| err.to_string())?;

    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", args.out_dir.display()))?;
    if let Some(snapshot_path) = &args.snapshot {
        let json = engine
            .snapshot()
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        write_file(snapshot_path, &json)?;
    }

    let mut renderer = engine.into_renderer();
    for (surface, file_name) in [(SurfaceKind::Map, "map.svg"), (SurfaceKind::Chart, "chart.svg")] {
        let document = renderer
            .take_document(surface)
            .ok_or_else(|| format!("no {file_name} was rendered"))?;
        write_file(&args.out_dir.join(file_name), &document)?;
    }
    println!("wrote map.svg and chart.svg to {}", args.out_dir.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), String> {
    fs::write(path, content).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut csv: Option<PathBuf> = None;
    let mut boundary: Option<PathBuf> = None;
    let mut attribute: Option<String> = None;
    let mut out_dir = PathBuf::from(".");
    let mut snapshot: Option<PathBuf> = None;
    let mut config: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--csv" => csv = Some(PathBuf::from(value("--csv")?)),
            "--boundary" => boundary = Some(PathBuf::from(value("--boundary")?)),
            "--attribute" => attribute = Some(value("--attribute")?),
            "--out-dir" => out_dir = PathBuf::from(value("--out-dir")?),
            "--snapshot" => snapshot = Some(PathBuf::from(value("--snapshot")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        csv: csv.ok_or_else(|| format!("--csv is required\n{USAGE}"))?,
        boundary: boundary.ok_or_else(|| format!("--boundary is required\n{USAGE}"))?,
        attribute,
        out_dir,
        snapshot,
        config,
    })
}
