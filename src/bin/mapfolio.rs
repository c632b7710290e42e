use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mapfolio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a bare base map (tiles and viewport only).
    Base(BaseArgs),
    /// Write the NBA arenas map: division-colored markers with popups, a
    /// population choropleth, both legends, and a layer toggle.
    Arenas(ArenasArgs),
}

#[derive(Parser, Debug)]
struct BaseArgs {
    /// Initial center latitude.
    #[arg(long, default_value_t = 41.947521, allow_negative_numbers = true)]
    lat: f64,

    /// Initial center longitude.
    #[arg(long, default_value_t = -87.673645, allow_negative_numbers = true)]
    lon: f64,

    /// Initial zoom level.
    #[arg(long, default_value_t = 6)]
    zoom: u8,

    /// Output HTML path.
    #[arg(long, default_value = "map.html")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ArenasArgs {
    /// Arena table (comma-delimited; LAT, LON, TEAM, ARENA, CAPACITY,
    /// OPENED, DIVISION).
    #[arg(long = "data", default_value = "data/nba-arenas.txt")]
    data_path: PathBuf,

    /// Boundary GeoJSON with a numeric `population` property per feature.
    #[arg(long = "states", default_value = "data/states-demo.json")]
    states_path: PathBuf,

    /// Output HTML path.
    #[arg(long, default_value = "nba-arenas-map.html")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).compact().init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Base(args) => cmd_base(args),
        Command::Arenas(args) => cmd_arenas(args),
    }
}

fn cmd_base(args: BaseArgs) -> anyhow::Result<()> {
    let scene = mapfolio::build_base_scene(mapfolio::LatLng::new(args.lat, args.lon), args.zoom)?;
    write_scene(&scene, &args.out)
}

fn cmd_arenas(args: ArenasArgs) -> anyhow::Result<()> {
    let scene = mapfolio::build_arena_scene(&args.data_path, &args.states_path)?;
    write_scene(&scene, &args.out)
}

fn write_scene(scene: &mapfolio::Scene, out: &Path) -> anyhow::Result<()> {
    mapfolio::write_html(scene, out).with_context(|| format!("write map '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
