//! edrace - headless race companion.
//!
//! Selects a race, tails the game journal for its events, samples the live
//! position from Status.json and prints a split every time a waypoint is
//! satisfied. The poll interval here is the host loop the engine is designed
//! around; the engine itself does no timing of its own.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use edrace_core::race::{config, RaceTracker};
use edrace_core::{settings, JournalWatcher};
use edrace_types::formatting::{format_position, format_split};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Track race progress from the game journal")]
struct Cli {
    /// Race to run, by name or file stem (omit with --list)
    race: Option<String>,

    /// Journal directory (default: settings, then the game's save location)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Race definition directory (default: settings, then the config dir)
    #[arg(long)]
    races_dir: Option<PathBuf>,

    /// Poll interval in milliseconds
    #[arg(long, default_value_t = 250)]
    interval_ms: u64,

    /// List available races and exit
    #[arg(long)]
    list: bool,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();
    let settings = settings::load();

    let race_dir = cli
        .races_dir
        .or_else(|| settings::race_dir(&settings))
        .ok_or("no races directory configured; pass --races-dir")?;

    if cli.list {
        let races = config::load_race_dir(&race_dir);
        if races.is_empty() {
            println!("No races in {}", race_dir.display());
        }
        for race in races {
            println!("{} ({} waypoints)", race.name, race.waypoint_count());
        }
        return Ok(());
    }

    let race_name = cli.race.ok_or("race name required (or use --list)")?;
    let race = config::select_race(&race_dir, &race_name)
        .ok_or_else(|| format!("race {race_name:?} not found in {}", race_dir.display()))?;

    let journal_dir = cli
        .dir
        .or_else(|| settings::journal_dir(&settings))
        .ok_or("no journal directory configured; pass --dir")?;

    tracing::info!(
        race = %race.name,
        waypoints = race.waypoint_count(),
        journal_dir = %journal_dir.display(),
        "starting race"
    );

    let mut tracker = RaceTracker::new(race);
    let mut watcher = JournalWatcher::with_watch(&journal_dir, tracker.watched_events());

    let mut interval = tokio::time::interval(Duration::from_millis(cli.interval_ms.max(1)));
    let mut warned_no_journal = false;

    loop {
        interval.tick().await;

        let changed = watcher.poll().map_err(|e| e.to_string())?;

        if !changed && watcher.cursor().filename.is_empty() {
            // Nothing has ever been read: the game probably isn't running yet
            if !warned_no_journal {
                tracing::warn!(
                    dir = %journal_dir.display(),
                    "no journal files found; waiting for the game to start"
                );
                warned_no_journal = true;
            }
            continue;
        }

        for event in watcher.events() {
            tracing::debug!(event = %event.name, "watched event");
        }

        let status = watcher.status();
        let position = status.as_ref().and_then(|s| s.position());
        let now = status
            .as_ref()
            .and_then(|s| s.time())
            .unwrap_or_else(|| Utc::now().naive_utc());

        if let Some(index) = tracker.update(watcher.events(), position, now) {
            print_split(&tracker, index);
        }

        if tracker.is_complete() {
            println!("Race complete.");
            return Ok(());
        }
    }
}

/// Print one satisfied waypoint as a split against the race start.
fn print_split(tracker: &RaceTracker, index: usize) {
    let progress = tracker.progress();
    let start = progress.first().copied().flatten();
    let elapsed = match (start, progress[index]) {
        (Some(start), Some(at)) => Some((at - start).num_seconds()),
        _ => None,
    };

    let wp = &tracker.race().waypoints[index];
    println!(
        "[{}/{}] {} @ {}  {}",
        index + 1,
        progress.len(),
        wp.event,
        format_position(wp.lat, wp.lng),
        format_split(elapsed),
    );
}
