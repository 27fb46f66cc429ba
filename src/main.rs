#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use diffTable::app::settings::runtime_keybinds::{self, Keybinds};
use diffTable::app::settings::{load_settings, load_settings_from, save_settings, save_settings_to, Settings};
use diffTable::runner::logging::init_logging;
use diffTable::{runner, ui, App};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Sections by first letter of the name.
    Name,
    /// Sections by team.
    Team,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "diffTable: a sectioned list that animates minimal updates",
    long_about = None
)]
struct Cli {
    /// Number of random people to start with (overrides `seed_people`).
    #[arg(long)]
    people: Option<usize>,

    /// Seed for the random roster.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial grouping.
    #[arg(long, value_enum, default_value_t = StrategyArg::Name)]
    strategy: StrategyArg,

    /// Start with letters in descending order.
    #[arg(long)]
    descending: bool,

    /// Settings file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the initial snapshot and exit instead of opening the screen.
    #[arg(long)]
    dump: bool,

    /// With `--dump`, print JSON instead of text.
    #[arg(long, requires = "dump")]
    json: bool,

    /// Write the effective settings back to the settings file.
    #[arg(long)]
    save_config: bool,
}

fn load(cli: &Cli) -> Settings {
    let loaded = match &cli.config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("diffTable: {e}; using default settings");
        Settings::default()
    })
}

fn dump(app: &App, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(&app.rendered).context("failed to encode snapshot")?;
        println!("{text}");
        return Ok(());
    }
    println!("{}", app.title());
    for section in &app.rendered {
        println!("{}", section.key);
        for person in &section.items {
            println!("  {person}");
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = load(&cli);
    if let Some(n) = cli.people {
        settings.seed_people = n;
    }
    if cli.dump {
        // dump prints a settled snapshot
        settings.background_diff = false;
    }

    let _guard = match init_logging(&settings, None) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("diffTable: logging disabled: {e:#}");
            None
        }
    };

    match Keybinds::with_overrides(&settings.keybinds) {
        Ok(binds) => runtime_keybinds::set(binds),
        Err(e) => tracing::warn!("ignoring keybind overrides: {}", e),
    }
    ui::colors::set_theme(&settings.theme);

    if cli.save_config {
        match &cli.config {
            Some(path) => save_settings_to(&settings, path),
            None => save_settings(&settings),
        }
        .context("failed to save settings")?;
    }

    let seed_people = settings.seed_people;
    let mut app = App::new(settings, cli.seed);
    if cli.descending {
        app.set_descending();
    }
    if cli.strategy == StrategyArg::Team {
        app.strategy = diffTable::PartitionStrategy::ByCategory;
    }
    app.seed_people(seed_people)
        .context("failed to build the initial list")?;

    if cli.dump {
        return dump(&app, cli.json);
    }
    runner::run_app(app)
}
