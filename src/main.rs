//! Waylock CLI
//!
//! Usage:
//!   waylock --status                        # Stage list and progress
//!   waylock --interactive                   # Interactive hunt loop
//!   waylock --complete 3                    # Mark a stage completed
//!   waylock --force-unlock 5                # Admin: unlock out of order
//!   waylock --reset                         # Admin: full reset (clears hints too)
//!   waylock --status --json                 # JSON output

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use waylock::core::{
    acquire_with_retry, catalog, coordinate, engine, frequency, proximity, timegate, FixOptions,
    GpsWatch, HintLedger, MockPositionSource, PositionSource, ProgressStore, ScanSession, Ticker,
};
use waylock::types::{CoordinateCheck, GeoPoint, Stage, StageStatus, UnlockSpec};
use waylock::{TICK_INTERVAL_MS, VERSION, WATCH_INTERVAL_MS};

#[derive(Parser, Debug)]
#[command(
    name = "waylock",
    version = VERSION,
    about = "Waylock - sequential unlock engine for location-based hunts",
    long_about = "Waylock drives a 15-stage proof-of-presence progression.\n\n\
                  Each stage is guarded by one unlock type:\n  \
                  gps     - proximity to target coordinates\n  \
                  puzzle  - coordinate entry or frequency tuning\n  \
                  scan    - simulated scan\n  \
                  time    - scheduled time lock\n\n\
                  Progress persists under the store directory and survives\n\
                  restarts; corrupt saves self-heal to a fresh start."
)]
struct Args {
    /// Show the stage list and overall progress
    #[arg(short, long)]
    status: bool,

    /// Interactive hunt loop on the active stage
    #[arg(short, long)]
    interactive: bool,

    /// Mark a stage completed by id (unknown id is a no-op)
    #[arg(long, value_name = "ID")]
    complete: Option<u32>,

    /// Admin: promote a locked stage to active, skipping its precondition
    #[arg(long, value_name = "ID")]
    force_unlock: Option<u32>,

    /// Admin: full reset to the start state; also clears all hint records
    #[arg(long)]
    reset: bool,

    /// Substitute the mock position source (fixed at the active stage target)
    #[arg(long)]
    mock_gps: bool,

    /// Directory for saved progress (default: ./waylock-data)
    #[arg(long, default_value = "./waylock-data")]
    store_dir: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let store = ProgressStore::new(&args.store_dir);
    let hints = HintLedger::new(&args.store_dir);

    // Restore saved progress or seed from the catalog
    let mut stages = match store.load() {
        Some(saved) => saved,
        None => {
            let seeded = engine::initialize(&catalog::initial_stages());
            persist(&store, &seeded);
            seeded
        }
    };

    if args.reset {
        stages = engine::initialize(&catalog::initial_stages());
        persist(&store, &stages);
        // Resetting progress must also reset hints
        hints.reset_all(stages.iter().map(|s| s.id));
        println!("{}", "Progress and hints reset.".yellow());
    }

    if let Some(id) = args.force_unlock {
        stages = engine::force_unlock(&stages, id);
        persist(&store, &stages);
        println!("{}", format!("Stage {:02} force-unlocked.", id).yellow());
    }

    if let Some(id) = args.complete {
        stages = engine::complete(&stages, id);
        persist(&store, &stages);
        println!("Stage {:02} marked completed.", id);
    }

    if args.interactive {
        run_interactive(stages, &store, &hints, &args);
    } else {
        print_status(&stages, &store, &args);
    }
}

/// Save, logging rather than escalating failure; progress continues in
/// memory for the session
fn persist(store: &ProgressStore, stages: &[Stage]) {
    if let Err(e) = store.save(stages) {
        eprintln!("Failed to save progress: {}", e);
    }
}

/// Render the stage list, progress, and resume info
fn print_status(stages: &[Stage], store: &ProgressStore, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(&stages) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to render stages: {}", e),
        }
        return;
    }

    println!();
    println!("{}", format!("  Waylock v{}", VERSION).bold());
    println!("  ─────────────────────────────────────────");

    for stage in stages {
        let line = format!(
            "  {} Stage {:02}  {:<20} {:<26} [{}]",
            stage.status.glyph(),
            stage.id,
            stage.subtitle,
            stage.location,
            stage.unlock_type()
        );
        let colored_line = match stage.status {
            StageStatus::Locked => line.dimmed(),
            StageStatus::Active => line.yellow(),
            StageStatus::Completed => line.green(),
        };
        println!("{}", colored_line);
    }

    let summary = engine::progress(stages);
    println!("  ─────────────────────────────────────────");
    println!("  {}", summary.to_string().bold());

    if engine::is_complete(stages) {
        println!("  {}", "Journey complete. Protocol Omega reached.".green().bold());
    } else if let Some(updated) = store.last_updated() {
        println!("  Resume available, last saved {}", updated.to_rfc3339());
    }
    println!();
}

/// Interactive hunt loop: verify the active stage, complete it, move on
fn run_interactive(
    mut stages: Vec<Stage>,
    store: &ProgressStore,
    hints: &HintLedger,
    args: &Args,
) {
    println!();
    println!("{}", format!("  Waylock v{} - Interactive Hunt", VERSION).bold());
    println!("  Commands: check | watch | enter <lat> <lng> | tune <mhz> | scan");
    println!("            hint | clue | status | quit");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if engine::is_complete(&stages) {
            println!("{}", "  ✓ All 15 stages completed. Protocol Omega.".green().bold());
            break;
        }

        let Some(active) = engine::active_stage(&stages).cloned() else {
            println!("No active stage. Run --reset or --force-unlock.");
            break;
        };

        let prompt = format!(
            "[stage {:02} {} {}] > ",
            active.id,
            active.status.glyph(),
            active.unlock_type()
        );
        print!("{}", prompt.yellow());
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("Progress saved. See you out there.");
            break;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("").to_ascii_lowercase();

        let satisfied = match command.as_str() {
            "status" => {
                print_status(&stages, store, args);
                false
            }
            "clue" => {
                println!("  {}", active.clue.italic());
                false
            }
            "hint" => {
                reveal_next_hint(&active, hints);
                false
            }
            "check" => check_stage(&active, args),
            "watch" => watch_stage(&active, args),
            "enter" => {
                let lat = parts.next().unwrap_or("");
                let lng = parts.next().unwrap_or("");
                enter_coordinates(&active, lat, lng)
            }
            "tune" => tune_frequency(&active, parts.next().unwrap_or("")),
            "scan" => run_scan(&active),
            other => {
                println!("  Unknown command: {}", other);
                false
            }
        };

        if satisfied {
            stages = engine::complete(&stages, active.id);
            persist(store, &stages);
            println!(
                "{}",
                format!("  ✓ Stage {:02} \"{}\" unlocked!", active.id, active.subtitle)
                    .green()
                    .bold()
            );
            if let Some(next) = engine::active_stage(&stages) {
                println!("  Next: Stage {:02} — {} ({})", next.id, next.subtitle, next.location);
                println!("  {}", next.clue.italic());
            }
        }
    }
}

/// Reveal the next hint in sequence for the active stage
fn reveal_next_hint(stage: &Stage, hints: &HintLedger) {
    let revealed = hints.revealed(stage.id);
    let next = revealed + 1;
    let after = hints.reveal(stage.id, next);
    if after == revealed {
        println!("  All {} hints revealed.", revealed);
    }
    for level in 1..=after {
        println!(
            "  HINT {} - {}",
            level,
            stage.hints[(level - 1) as usize].italic()
        );
    }
}

/// One-shot position check for a gps stage
fn check_stage(stage: &Stage, args: &Args) -> bool {
    match stage.spec {
        UnlockSpec::Gps { .. } => {
            let source = build_source(stage, args);
            match acquire_with_retry(source.as_ref(), &FixOptions::default()) {
                Ok(fix) => {
                    let report = proximity::evaluate(stage, Some(&fix))
                        .unwrap_or_else(waylock::types::ProximityReport::pending);
                    print_proximity(&fix, report.distance_m);
                    report.in_range
                }
                Err(e) => {
                    println!("  {}", e.to_string().red());
                    false
                }
            }
        }
        UnlockSpec::Time { ref target_time } => check_time(target_time),
        _ => {
            println!("  'check' applies to gps and time stages. Try the matching command.");
            false
        }
    }
}

/// Continuous tracking for a gps stage until in range or the watch is quit
fn watch_stage(stage: &Stage, args: &Args) -> bool {
    let UnlockSpec::Gps {
        latitude,
        longitude,
        radius_meters,
    } = stage.spec
    else {
        if let UnlockSpec::Time { ref target_time } = stage.spec {
            return countdown(target_time);
        }
        println!("  'watch' applies to gps and time stages.");
        return false;
    };

    let target = GeoPoint::new(latitude, longitude);
    let source = build_source(stage, args);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start watch runtime: {}", e);
            return false;
        }
    };

    runtime.block_on(async {
        let gps_watch =
            GpsWatch::spawn_with_interval(source, FixOptions::default(), Duration::from_millis(WATCH_INTERVAL_MS));
        let mut rx = gps_watch.subscribe();

        println!("  Watching position (Ctrl-C to abort)...");
        let mut in_range = false;
        // Bounded: give up after 120 readings rather than hanging forever
        for _ in 0..120 {
            if rx.changed().await.is_err() {
                break;
            }
            let reading = rx.borrow().clone();
            match reading {
                Some(Ok(fix)) => {
                    let report = proximity::check(Some(&fix), target, radius_meters);
                    print_proximity(&fix, report.distance_m);
                    if report.in_range {
                        in_range = true;
                        break;
                    }
                }
                Some(Err(e)) => println!("  {}", e.to_string().red()),
                None => {}
            }
        }

        // Teardown on every exit path
        gps_watch.cancel();
        in_range
    })
}

fn print_proximity(fix: &waylock::types::GpsPosition, distance_m: Option<f64>) {
    let quality = waylock::core::geo::accuracy_quality(fix.accuracy_m);
    let distance = distance_m
        .map(waylock::core::geo::format_distance)
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "  position {} | distance {} | {}",
        fix.point(),
        distance.bold(),
        quality.description().dimmed()
    );
    if waylock::core::sensor::is_low_accuracy(fix) {
        println!("  {}", "Accuracy is poor; reading kept but unreliable.".dimmed());
    }
}

/// Coordinate-entry attempt
fn enter_coordinates(stage: &Stage, lat_input: &str, lng_input: &str) -> bool {
    let UnlockSpec::CoordinateEntry {
        latitude,
        longitude,
        tolerance_degrees,
    } = stage.spec
    else {
        println!("  'enter' applies to coordinate-entry stages.");
        return false;
    };

    let target = GeoPoint::new(latitude, longitude);
    match coordinate::verify(lat_input, lng_input, target, tolerance_degrees) {
        // Validation error: reported immediately, not counted as an attempt
        Err(e) => {
            println!("  {}", e.to_string().red());
            false
        }
        Ok(CoordinateCheck::Match) => true,
        Ok(CoordinateCheck::Mismatch { distance_km }) => {
            println!(
                "  Coordinates don't match. You're about {:.1}km away. Check the clue again.",
                distance_km
            );
            false
        }
    }
}

/// Frequency-tuning attempt
fn tune_frequency(stage: &Stage, input: &str) -> bool {
    let UnlockSpec::Frequency {
        target_mhz,
        tolerance_mhz,
    } = stage.spec
    else {
        println!("  'tune' applies to frequency stages.");
        return false;
    };

    let value: f64 = match input.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            println!("  Enter a frequency in MHz, e.g. 'tune 20.50'.");
            return false;
        }
    };

    let reading = frequency::evaluate(frequency::tune(value), target_mhz, tolerance_mhz);
    let bar_len = (reading.signal_strength_pct / 10.0).round() as usize;
    println!(
        "  signal [{}{}] {:.0}%",
        "█".repeat(bar_len),
        "░".repeat(10 - bar_len.min(10)),
        reading.signal_strength_pct
    );
    if reading.matched {
        println!("  {}", "Transmission decoded.".green());
    }
    reading.matched
}

/// Simulated scan
fn run_scan(stage: &Stage) -> bool {
    let UnlockSpec::Scan { duration_secs } = stage.spec else {
        println!("  'scan' applies to scan stages.");
        return false;
    };

    let session = ScanSession::start(duration_secs);
    println!("  Scanning...");
    while !session.is_complete() {
        std::thread::sleep(Duration::from_millis(250));
        print!("\r  Scanning... {:>3.0}%", session.progress_pct());
        let _ = io::stdout().flush();
    }
    println!("\r  Scan complete.        ");
    true
}

/// One-shot time-gate check
fn check_time(target_time: &str) -> bool {
    let Some(target) = timegate::parse_target(target_time) else {
        eprintln!("Malformed target time in catalog: {}", target_time);
        return false;
    };
    let status = timegate::evaluate_now(target);
    if status.reached {
        println!("  {}", "Time gate open.".green());
    } else {
        println!("  Locked until {}. Remaining: {}", target_time, status.countdown());
    }
    status.reached
}

/// Live countdown for a time stage, re-evaluated every second
fn countdown(target_time: &str) -> bool {
    let Some(target) = timegate::parse_target(target_time) else {
        eprintln!("Malformed target time in catalog: {}", target_time);
        return false;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start countdown runtime: {}", e);
            return false;
        }
    };

    runtime.block_on(async {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_millis(TICK_INTERVAL_MS), move || {
            let status = timegate::evaluate_now(target);
            let open = status.reached;
            let _ = tx.send(status);
            !open
        });

        let mut reached = false;
        while let Some(status) = rx.recv().await {
            if status.reached {
                println!("\r  {}                    ", "Time gate open.".green());
                reached = true;
                break;
            }
            print!("\r  Time until unlock: {}", status.countdown().bold());
            let _ = io::stdout().flush();
        }

        ticker.cancel();
        reached
    })
}

/// Position source selection: the mock substitutes at the active stage's
/// target with excellent accuracy
fn build_source(stage: &Stage, args: &Args) -> Arc<dyn PositionSource> {
    if args.mock_gps {
        let (lat, lng) = match stage.spec {
            UnlockSpec::Gps {
                latitude,
                longitude,
                ..
            } => (latitude, longitude),
            _ => (0.0, 0.0),
        };
        return Arc::new(MockPositionSource::at(lat, lng));
    }
    // No platform sensor on this build target; without --mock-gps the
    // source reports unsupported and the caller surfaces the message.
    Arc::new(waylock::core::FailingPositionSource {
        kind: waylock::types::GpsErrorKind::Unsupported,
    })
}
