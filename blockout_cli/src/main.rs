use blockout_core::*;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blockout")]
#[command(about = "Workout session builder and countdown timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the workout catalog (default)
    Catalog {
        /// Only show workouts in this category
        #[arg(long)]
        category: Option<String>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the schedule for a session without running it
    Plan {
        /// Session blocks as `<workout-id>` or `<workout-id>:<minutes>`,
        /// in playback order
        #[arg(long = "block", required = true)]
        blocks: Vec<String>,

        /// Also show the timeline view at this elapsed time (seconds)
        #[arg(long)]
        at: Option<u32>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a session with the countdown timer
    Run {
        /// Session blocks as `<workout-id>` or `<workout-id>:<minutes>`,
        /// in playback order
        #[arg(long = "block", required = true)]
        blocks: Vec<String>,

        /// Override the tick interval in milliseconds (1000 = real time)
        #[arg(long)]
        tick_ms: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    blockout_core::logging::init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let catalog = default_catalog();

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match cli.command {
        Some(Commands::Catalog { category, json }) => cmd_catalog(catalog, category, json),
        Some(Commands::Plan { blocks, at, json }) => cmd_plan(catalog, &config, &blocks, at, json),
        Some(Commands::Run { blocks, tick_ms }) => cmd_run(catalog, &config, &blocks, tick_ms),
        None => cmd_catalog(catalog, None, false),
    }
}

fn cmd_catalog(catalog: &Catalog, category: Option<String>, json: bool) -> Result<()> {
    let filter = match category {
        Some(id) => {
            if catalog.category(&id).is_none() {
                eprintln!("Unknown category: {}", id);
            }
            CategoryFilter::Category(id)
        }
        None => CategoryFilter::All,
    };

    let items: Vec<_> = catalog.filter(&filter).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&items).expect("catalog items serialize"));
        return Ok(());
    }

    for item in items {
        let label = catalog
            .category(&item.category_id)
            .map(|c| c.label.as_str())
            .unwrap_or("?");
        println!("{:<5} {:<28} [{}]", item.id, item.name, label);
    }

    Ok(())
}

fn cmd_plan(
    catalog: &Catalog,
    config: &Config,
    specs: &[String],
    at: Option<u32>,
    json: bool,
) -> Result<()> {
    let session = build_session(catalog, config, specs);

    if json {
        let mut payload = serde_json::json!({
            "blocks": session.blocks(),
            "total_minutes": session.total_minutes(),
            "total_seconds": session.total_seconds(),
        });
        if let Some(elapsed) = at {
            let view = compute_view(&session, elapsed);
            payload["view"] =
                serde_json::to_value(&view).expect("timeline view serializes");
        }
        println!("{}", serde_json::to_string_pretty(&payload).expect("plan serializes"));
        return Ok(());
    }

    if session.is_empty() {
        println!("Session is empty.");
        return Ok(());
    }

    println!("Session plan ({} min total):", session.total_minutes());
    let mut start = 0u32;
    for (index, block) in session.blocks().iter().enumerate() {
        let end = start + block.duration_seconds();
        println!(
            "  {}. {:<28} {:>2} min  {} - {}",
            index + 1,
            item_name(catalog, block),
            block.minutes,
            format_time(start),
            format_time(end),
        );
        start = end;
    }

    if let Some(elapsed) = at {
        let view = compute_view(&session, elapsed);
        println!();
        println!("At {}:", format_time(elapsed));
        match view.active {
            Some(active) => {
                let block = &session.blocks()[active.index];
                println!("  Current workout:      {}", item_name(catalog, block));
                println!("  Time into block:      {}", format_time(active.seconds_in));
                println!(
                    "  Time left in block:   {}",
                    format_time(active.seconds_remaining)
                );
            }
            None => println!("  Current workout:      —"),
        }
        println!(
            "  Time left in session: {}",
            format_time(view.total_remaining_seconds)
        );
        println!(
            "  Session progress:     {:.0}%",
            view.session_progress * 100.0
        );
    }

    Ok(())
}

fn cmd_run(
    catalog: &Catalog,
    config: &Config,
    specs: &[String],
    tick_ms: Option<u64>,
) -> Result<()> {
    let session = build_session(catalog, config, specs);
    if session.is_empty() {
        println!("Session is empty - nothing to run.");
        return Ok(());
    }

    let interval = match tick_ms {
        Some(0) => return Err(Error::Config("--tick-ms must be at least 1".into())),
        Some(ms) => std::time::Duration::from_millis(ms),
        None => config.tick_interval(),
    };

    let mut engine = TimerEngine::new();
    engine.start(&session);

    println!(
        "Starting session: {} blocks, {} min total",
        session.len(),
        session.total_minutes()
    );

    let mut current_block: Option<usize> = None;
    let mut ticker = Ticker::start(interval);

    while engine.is_running() {
        if ticker.recv().is_none() {
            break;
        }

        let events = engine.tick(&session);
        let view = compute_view(&session, engine.elapsed_seconds());

        if let Some(active) = view.active {
            if current_block != Some(active.index) {
                current_block = Some(active.index);
                let block = &session.blocks()[active.index];
                println!(
                    "▶ {} ({} min)  [{} / {}]",
                    item_name(catalog, block),
                    block.minutes,
                    format_time(view.elapsed_seconds),
                    format_time(view.total_seconds),
                );
            }
        }

        for event in events {
            match event {
                Event::WarningRaised { .. } => {
                    println!("  ⚠ Next workout in 1 min");
                }
                Event::Finished { elapsed_seconds, .. } => {
                    println!("✓ Session complete ({})", format_time(elapsed_seconds));
                }
                _ => {}
            }
        }
    }

    ticker.stop();
    Ok(())
}

/// Build a session from `id` / `id:minutes` specs, surfacing the silent
/// no-op on unknown ids as a stderr warning.
fn build_session(catalog: &Catalog, config: &Config, specs: &[String]) -> Session {
    let mut session = Session::new();

    for spec in specs {
        let (item_id, minutes) = parse_block_spec(spec, config.default_block_minutes());
        if session
            .append_with_minutes(catalog, item_id, minutes)
            .is_none()
        {
            eprintln!("Unknown workout id '{}' - skipping", item_id);
        }
    }

    session
}

fn parse_block_spec<'a>(spec: &'a str, default_minutes: u32) -> (&'a str, i64) {
    match spec.split_once(':') {
        Some((id, minutes)) => match minutes.parse::<i64>() {
            Ok(m) => (id, m),
            Err(_) => {
                eprintln!(
                    "Invalid minutes '{}' in '{}' - using default of {} min",
                    minutes, spec, default_minutes
                );
                (id, default_minutes as i64)
            }
        },
        None => (spec, default_minutes as i64),
    }
}

fn item_name<'a>(catalog: &'a Catalog, block: &SessionBlock) -> &'a str {
    // A session block can only be created against a validated catalog id,
    // so a miss here is a programming error.
    &catalog
        .get(&block.item_id)
        .expect("session block references an item missing from the catalog")
        .name
}

fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
