use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};
use wm_app::{AppResult, Session};
use wm_core::{ActivityDetail, GeoPoint, Workout, WorkoutId};
use wm_store::{FileBlobStore, WorkoutStore};

#[derive(Parser)]
#[command(name = "wm-cli")]
#[command(about = "Waymark CLI - map-based workout log", long_about = None)]
struct Cli {
    /// Directory holding the workout store
    #[arg(long, default_value = ".waymark")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List logged workouts
    List,
    /// Log a new workout
    #[command(subcommand)]
    Add(AddCommands),
    /// Delete a workout by id
    Delete {
        /// Workout id as shown by `list`
        id: String,
    },
    /// Remove every stored workout
    Clear,
}

#[derive(Subcommand)]
enum AddCommands {
    /// Log a run
    Running {
        /// Latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Distance in kilometers
        #[arg(long)]
        distance: f64,
        /// Duration in minutes
        #[arg(long)]
        duration: f64,
        /// Cadence in steps per minute
        #[arg(long)]
        cadence: f64,
    },
    /// Log a ride
    Cycling {
        /// Latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Distance in kilometers
        #[arg(long)]
        distance: f64,
        /// Duration in minutes
        #[arg(long)]
        duration: f64,
        /// Elevation gain in meters
        #[arg(long)]
        elevation: f64,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut session = open_session(&cli.data_dir)?;

    match cli.command {
        Commands::List => cmd_list(&session),
        Commands::Add(add) => cmd_add(&mut session, add),
        Commands::Delete { id } => cmd_delete(&mut session, &id),
        Commands::Clear => cmd_clear(&mut session),
    }
}

fn open_session(data_dir: &Path) -> AppResult<Session<FileBlobStore>> {
    let blob = FileBlobStore::new(data_dir.to_path_buf())?;
    Session::open(WorkoutStore::new(blob))
}

fn cmd_list(session: &Session<FileBlobStore>) -> AppResult<()> {
    if session.workouts().is_empty() {
        println!("No workouts logged yet");
        return Ok(());
    }

    for workout in session.workouts() {
        match workout.detail() {
            ActivityDetail::Running {
                cadence_spm,
                pace_min_per_km,
            } => println!(
                "{}  {}  {:.1} km  {:.0} min  {:.1} min/km  {:.0} spm  ({})",
                workout.id(),
                workout.description(),
                workout.distance_km(),
                workout.duration_min(),
                pace_min_per_km,
                cadence_spm,
                workout.location(),
            ),
            ActivityDetail::Cycling {
                elevation_gain_m,
                speed_kmh,
            } => println!(
                "{}  {}  {:.1} km  {:.0} min  {:.1} km/h  {:.0} m  ({})",
                workout.id(),
                workout.description(),
                workout.distance_km(),
                workout.duration_min(),
                speed_kmh,
                elevation_gain_m,
                workout.location(),
            ),
        }
    }
    Ok(())
}

fn cmd_add(session: &mut Session<FileBlobStore>, add: AddCommands) -> AppResult<()> {
    let now = Local::now();
    let workout = match add {
        AddCommands::Running {
            lat,
            lon,
            distance,
            duration,
            cadence,
        } => {
            let at = GeoPoint::new(lat, lon)?;
            Workout::running(at, distance, duration, cadence, now)?
        }
        AddCommands::Cycling {
            lat,
            lon,
            distance,
            duration,
            elevation,
        } => {
            let at = GeoPoint::new(lat, lon)?;
            Workout::cycling(at, distance, duration, elevation, now)?
        }
    };

    let description = workout.description().to_string();
    let id = workout.id().clone();
    session.add(workout)?;
    println!("✓ Logged {description} ({id})");
    Ok(())
}

fn cmd_delete(session: &mut Session<FileBlobStore>, id: &str) -> AppResult<()> {
    let id = WorkoutId::from(id);
    if session.delete(&id)? {
        println!("✓ Deleted {id}");
    } else {
        println!("No workout with id {id}");
    }
    Ok(())
}

fn cmd_clear(session: &mut Session<FileBlobStore>) -> AppResult<()> {
    session.clear()?;
    println!("✓ Cleared stored workouts");
    Ok(())
}
