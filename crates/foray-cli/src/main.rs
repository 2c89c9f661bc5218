//! Command-line driver for the foray resolver
//!
//! Seeds the RNG, assembles the static tables and an in-memory actor,
//! resolves one or more forays, and prints the reports.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use foray_core::{
    ActorId, ActorState, ActorStore, EncounterOutcome, EncounterReport, EncounterRng, Job,
    MemoryStore, NoBoost, ResolveError, Resolver, ResolverConfig, ThreatLevel,
};
use foray_data::{LOCATIONS, LOOT, MONSTERS, find_location};

#[derive(Parser, Debug)]
#[command(name = "foray", about = "Resolve wilderness encounters from the command line")]
struct Args {
    /// Location name, e.g. "Windswept Field"
    #[arg(long, default_value = "Windswept Field")]
    location: String,

    /// Acting job (hunter, mercenary, scout, forager, villager)
    #[arg(long, default_value = "hunter")]
    job: Job,

    /// Resolve under a blood moon
    #[arg(long)]
    blood_moon: bool,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of forays to run back to back
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Starting hearts
    #[arg(long, default_value_t = 10)]
    hearts: u32,

    /// Starting stamina
    #[arg(long, default_value_t = 25)]
    stamina: u32,

    /// Attack stat total
    #[arg(long, default_value_t = 0)]
    attack: i32,

    /// Defense stat total
    #[arg(long, default_value_t = 0)]
    defense: i32,

    /// JSON file overriding the default tuning (partial files are fine)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit each report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<ResolverConfig>(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ResolverConfig::default(),
    };

    let location = find_location(&args.location)
        .with_context(|| format!("unknown location '{}'", args.location))?;
    let threat = if args.blood_moon {
        ThreatLevel::BloodMoon
    } else {
        ThreatLevel::Normal
    };

    let mut rng = match args.seed {
        Some(seed) => EncounterRng::new(seed),
        None => EncounterRng::from_entropy(),
    };
    info!(seed = rng.seed(), location = location.name, job = %args.job, "foray starting");

    let resolver = Resolver::new(MONSTERS, LOCATIONS, LOOT, cfg);
    let mut store = MemoryStore::new();
    let actor_id = ActorId(1);
    let mut actor = ActorState::new(actor_id, args.hearts, args.stamina);
    actor.attack = args.attack;
    actor.defense = args.defense;
    store.insert(actor);

    for run in 1..=args.runs {
        let result = resolver.resolve(
            &mut store,
            &NoBoost,
            &mut rng,
            actor_id,
            location.id,
            args.job,
            threat,
            Utc::now(),
        );
        match result {
            Ok(report) => {
                debug!(run, outcome = ?report.outcome, "foray resolved");
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("[{}] {}", run, render(&report));
                }
            }
            Err(err @ ResolveError::OutOfStamina { .. }) => {
                warn!(run, %err, "stopping");
                println!("out of stamina after {} forays", run - 1);
                break;
            }
            Err(err @ ResolveError::ActorKnockedOut(_)) => {
                warn!(run, %err, "stopping");
                println!("knocked out; heal before heading back out");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let state = store.get(actor_id)?;
    println!(
        "-- {} hearts / {} stamina remaining",
        state.hearts, state.stamina
    );
    Ok(())
}

fn render(report: &EncounterReport) -> String {
    let mut line = match &report.outcome {
        EncounterOutcome::NoEncounter => "nothing stirs".to_string(),
        EncounterOutcome::RaidSignal { monster } => {
            format!("{} rises - RAID! gather the village", monster)
        }
        EncounterOutcome::Victory {
            roll,
            defense_success,
            ..
        } => {
            let monster = report.monster.as_deref().unwrap_or("the monster");
            if *defense_success {
                format!("{} glances off your guard (roll {})", monster, roll)
            } else {
                format!("you best the {} (roll {})", monster, roll)
            }
        }
        EncounterOutcome::Damaged { roll, hearts_lost } => {
            let monster = report.monster.as_deref().unwrap_or("the monster");
            format!("{} hits you for {} (roll {})", monster, hearts_lost, roll)
        }
        EncounterOutcome::KnockedOut { roll, .. } => {
            let monster = report.monster.as_deref().unwrap_or("the monster");
            format!("{} knocks you out cold (roll {})", monster, roll)
        }
    };

    if let Some(bd) = &report.breakdown {
        line.push_str(&format!(
            " | roll {} -> {} -> {} -> {}",
            bd.base, bd.after_location, bd.pre_boost, bd.final_roll
        ));
    }
    if report.kept_reroll {
        line.push_str(" | fate intervened");
    }
    for award in &report.loot {
        line.push_str(&format!(" | +{} {}", award.quantity, award.item));
    }
    line
}
