use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use anka_engine::{CalendarDate, NumerologyMap, audit_logs, enable_debug_mode, full_map};
use anka_profile::{BUILTIN_PROFILE_NAMES, NumerologyProfile, active_profile, builtin};
use anka_regress::{SEED_FIXTURES, run_str};

#[derive(Parser)]
#[command(name = "anka", about = "Anka numerology CLI")]
struct Cli {
    /// Capture per-call audit records and print engine debug events
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full numerology map for a name and birth date
    Map {
        /// Raw name, diacritics included
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Current date for the personal cycles (default: the birth date)
        #[arg(long)]
        current: Option<String>,
        /// Built-in profile name (default: the active profile)
        #[arg(long)]
        profile: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay a regression fixture file
    Fixtures {
        /// Path to a fixture JSON file (default: the embedded seed set)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List built-in profiles and their switches
    Profiles,
}

fn parse_date(s: &str) -> CalendarDate {
    match s.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid date '{s}': {e}");
            exit(1);
        }
    }
}

fn resolve_profile(name: Option<&str>) -> NumerologyProfile {
    match name {
        Some(n) => match builtin(n) {
            Some(p) => p,
            None => {
                eprintln!("Unknown profile: {n}");
                eprintln!("Valid: {}", BUILTIN_PROFILE_NAMES.join(", "));
                exit(1);
            }
        },
        None => (*active_profile()).clone(),
    }
}

fn fmt_list(values: &[u32]) -> String {
    if values.is_empty() {
        return "-".to_owned();
    }
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

fn print_map(map: &NumerologyMap) {
    println!("Motivation:            {}", map.motivation);
    println!("Expression:            {}", map.expression);
    println!("Impression:            {}", map.impression);
    println!("Destiny:               {}", map.destiny);
    println!("Mission:               {}", map.mission);
    println!("Psychic number:        {}", map.psychic_number);
    println!("Subconscious response: {}", map.subconscious_response);
    println!("Karmic lessons:        {}", fmt_list(&map.karmic_lessons));
    println!("Karmic debts:          {}", fmt_list(&map.karmic_debts));
    println!("Hidden tendencies:     {}", fmt_list(&map.hidden_tendencies));
    println!(
        "Life cycles:           {} {} {}",
        map.life_cycles.first, map.life_cycles.second, map.life_cycles.third
    );
    println!(
        "Challenges:            {} {} (main {})",
        map.challenges.first, map.challenges.second, map.challenges.main
    );
    println!(
        "Decisive moments:      {} {} {} {}",
        map.decisive_moments.first,
        map.decisive_moments.second,
        map.decisive_moments.third,
        map.decisive_moments.fourth
    );
    println!(
        "Personal year/month/day: {} {} {}",
        map.personal.year, map.personal.month, map.personal.day
    );
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
        enable_debug_mode(true);
    }

    match cli.command {
        Commands::Map {
            name,
            birth,
            current,
            profile,
            json,
        } => {
            let profile = resolve_profile(profile.as_deref());
            let birth = parse_date(&birth);
            let current = current.as_deref().map_or(birth, parse_date);
            let map = full_map(&name, birth, current, &profile);
            if json {
                match serde_json::to_string_pretty(&map) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(e) => {
                        eprintln!("Failed to render JSON: {e}");
                        exit(1);
                    }
                }
            } else {
                println!("Name:    {name}");
                println!("Birth:   {birth}");
                println!("Profile: {}", profile.name);
                print_map(&map);
            }
            if cli.debug {
                for record in audit_logs() {
                    eprintln!("{record:?}");
                }
            }
        }
        Commands::Fixtures { file } => {
            let json = match &file {
                Some(path) => match std::fs::read_to_string(path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("Failed to read {}: {e}", path.display());
                        exit(1);
                    }
                },
                None => SEED_FIXTURES.to_owned(),
            };
            match run_str(&json) {
                Ok(summary) => {
                    println!("{summary}");
                    if summary.passed != summary.total {
                        exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Fixture run failed: {e}");
                    exit(1);
                }
            }
        }
        Commands::Profiles => {
            for name in BUILTIN_PROFILE_NAMES {
                let p = builtin(name).unwrap_or_else(|| {
                    eprintln!("Missing built-in profile: {name}");
                    exit(1);
                });
                println!(
                    "{:<12} vowels {}, particles {}, mission {}, range {}-{}",
                    p.name,
                    if p.use_global_vowel_sum {
                        "global"
                    } else {
                        "per-word"
                    },
                    if p.include_particles {
                        "included"
                    } else {
                        "excluded"
                    },
                    p.mission_formula.name(),
                    p.number_range.0,
                    p.number_range.1
                );
            }
        }
    }
}
