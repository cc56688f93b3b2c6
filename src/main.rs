use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use ballbot::ai::StrategyKind;
use ballbot::config::{self, load_config, load_config_from};
use ballbot::{get_strategy, GameState, Score, Team};

/// What the harness was asked to do
#[derive(Debug, PartialEq)]
enum Command {
    List,
    Formation { score: Score },
    Tick { team: Team, snapshot: PathBuf },
    Help,
}

#[derive(Debug, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    debug: bool,
    command: Command,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ballbot");

    let parsed = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    if parsed.command == Command::Help {
        print_usage(program);
        return Ok(());
    }

    init_logging(parsed.debug);

    let conf = match &parsed.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    debug!(?conf, "configuration loaded");
    config::install(conf)?;

    run(parsed.command)
}

/// Log to stderr so stdout stays clean JSON
fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::List => {
            for kind in StrategyKind::all() {
                println!("{:<12} {}", kind.display_name(), kind.description());
            }
        }
        Command::Formation { score } => {
            // Every side resets into the same formation
            let formation = get_strategy(Team::Ours).on_reset(&score);
            println!("{}", serde_json::to_string_pretty(&formation)?);
        }
        Command::Tick { team, snapshot } => {
            let contents = fs::read_to_string(&snapshot)
                .with_context(|| format!("reading snapshot {}", snapshot.display()))?;
            let game: GameState = serde_json::from_str(&contents)
                .with_context(|| format!("parsing snapshot {}", snapshot.display()))?;

            let needed = config::get_config().num_players;
            if game.allies.len() < needed {
                bail!(
                    "snapshot has {} allies but {} players are controlled",
                    game.allies.len(),
                    needed
                );
            }

            let actions = get_strategy(team).on_tick(&game);
            println!("{}", serde_json::to_string_pretty(&actions)?);
        }
        Command::Help => {}
    }
    Ok(())
}

/// Parse command line arguments (without the program name)
fn parse_args(args: &[String]) -> Result<Args> {
    let mut config = None;
    let mut debug = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().context("--config requires a path")?;
                config = Some(PathBuf::from(path));
            }
            "--debug" | "-d" => debug = true,
            "--help" | "-h" => {
                return Ok(Args {
                    config,
                    debug,
                    command: Command::Help,
                })
            }
            flag if flag.starts_with('-') => bail!("unknown flag: {}", flag),
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        [] | ["help"] => Command::Help,
        ["list"] => Command::List,
        ["formation"] => Command::Formation {
            score: Score::default(),
        },
        ["formation", ours, theirs] => Command::Formation {
            score: Score::new(parse_goals(ours)?, parse_goals(theirs)?),
        },
        ["tick", team, snapshot] => Command::Tick {
            team: parse_team(team)?,
            snapshot: PathBuf::from(snapshot),
        },
        ["tick", ..] => bail!("tick requires a team and a snapshot path"),
        [other, ..] => bail!("unknown command: {}", other),
    };

    Ok(Args {
        config,
        debug,
        command,
    })
}

fn parse_goals(value: &str) -> Result<u32> {
    value
        .parse()
        .with_context(|| format!("invalid goal count: {}", value))
}

fn parse_team(value: &str) -> Result<Team> {
    match value.to_ascii_lowercase().as_str() {
        "ours" | "a" | "left" | "0" => Ok(Team::Ours),
        "theirs" | "b" | "right" | "1" => Ok(Team::Theirs),
        other => bail!("unknown team: {} (expected ours or theirs)", other),
    }
}

fn print_usage(program: &str) {
    println!("Ballbot - team strategy for the two-team ball game");
    println!();
    println!("Usage:");
    println!(
        "  {} list                          # List available tactics",
        program
    );
    println!(
        "  {} formation [ours theirs]       # Print the reset formation",
        program
    );
    println!(
        "  {} tick <ours|theirs> <state>    # Run one tick on a JSON snapshot",
        program
    );
    println!();
    println!("Options:");
    println!("  -c, --config <path>   Load this config file instead of the default");
    println!("  -d, --debug           Verbose logging on stderr");
    println!("  -h, --help            Show this message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_tick() {
        let parsed = parse_args(&args(&["--debug", "tick", "theirs", "state.json"])).unwrap();

        assert!(parsed.debug);
        assert_eq!(
            parsed.command,
            Command::Tick {
                team: Team::Theirs,
                snapshot: PathBuf::from("state.json"),
            }
        );
    }

    #[test]
    fn test_parse_formation_with_score() {
        let parsed = parse_args(&args(&["formation", "2", "1", "-c", "bot.toml"])).unwrap();

        assert_eq!(parsed.config, Some(PathBuf::from("bot.toml")));
        assert_eq!(
            parsed.command,
            Command::Formation {
                score: Score::new(2, 1)
            }
        );
    }

    #[test]
    fn test_parse_team_aliases() {
        assert_eq!(parse_team("LEFT").unwrap(), Team::Ours);
        assert_eq!(parse_team("1").unwrap(), Team::Theirs);
        assert!(parse_team("middle").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["tick", "ours"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["formation", "x", "0"])).is_err());
        assert_eq!(parse_args(&[]).unwrap().command, Command::Help);
    }
}
