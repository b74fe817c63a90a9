#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use broadside::{
    coord_label, init_logging, parse_coord, parse_direction, print_match_view, print_own_board,
    strategy_for, Difficulty, Match, Phase, ShotOutcome, Targeting,
};
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Level {
    Naive,
    Adaptive,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Naive => Difficulty::Naive,
            Level::Adaptive => Difficulty::Adaptive,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive match against the computer.
    Play {
        #[arg(long, default_value_t = 10, help = "Grid side length: 10, 15 or 20")]
        size: usize,
        #[arg(long, value_enum, default_value_t = Level::Adaptive)]
        level: Level,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Record a countdown of this many seconds on the match")]
        timer: Option<u32>,
        #[arg(long, help = "Resume the saved match instead of starting fresh")]
        resume: bool,
    },
    /// Simulate a full match between two automated sides and print a JSON summary.
    Auto {
        #[arg(long, default_value_t = 10, help = "Grid side length: 10, 15 or 20")]
        size: usize,
        #[arg(long, value_enum, default_value_t = Level::Adaptive)]
        level: Level,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            size,
            level,
            seed,
            timer,
            resume,
        } => play(size, level, seed, timer, resume),
        Commands::Auto { size, level, seed } => auto(size, level, seed),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn check_size(size: usize) -> anyhow::Result<()> {
    if matches!(size, 10 | 15 | 20) {
        Ok(())
    } else {
        Err(anyhow::anyhow!("supported grid sizes are 10, 15 and 20"))
    }
}

#[cfg(feature = "std")]
fn read_line() -> anyhow::Result<String> {
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn play(
    size: usize,
    level: Level,
    seed: Option<u64>,
    timer: Option<u32>,
    resume: bool,
) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = if resume {
        Match::load().map_err(|e| anyhow::anyhow!(e))?
    } else {
        check_size(size)?;
        let mut game = Match::new(size, level.into()).map_err(|e| anyhow::anyhow!(e))?;
        if let Some(secs) = timer {
            game.set_timed(true, secs);
        }
        game.set_phase(Phase::SetShips);
        set_ships(&mut game, &mut rng)?;
        game.opponent_mut()
            .place_all_randomly(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        game
    };
    game.set_phase(Phase::Battle);
    battle(&mut game, &mut rng)
}

#[cfg(feature = "std")]
fn set_ships(game: &mut Match, rng: &mut SmallRng) -> anyhow::Result<()> {
    println!("Place your vessels (e.g. B4 h). Press enter to place the rest randomly.");
    while !game.player().waiting().is_empty() {
        print_own_board(game.player());
        let next = &game.player().waiting()[0];
        let (name, length) = (next.class().name(), next.length());
        print!("Place {} (length {}): ", name, length);
        let line = read_line()?;
        if line.is_empty() {
            game.player_mut()
                .place_all_randomly(rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            break;
        }
        let mut parts = line.split_whitespace();
        let coord = parts.next().and_then(parse_coord);
        let direction = parse_direction(parts.next().unwrap_or("h"));
        match coord {
            Some((r, c)) => {
                if !game.player_mut().place_vessel(0, r, c, direction) {
                    println!("Cannot place there.");
                }
            }
            None => println!("Invalid input"),
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn battle(game: &mut Match, rng: &mut SmallRng) -> anyhow::Result<()> {
    loop {
        println!();
        print_match_view(game);
        print!("Your shot (e.g. B4), or 'save' / 'quit': ");
        let line = read_line()?;
        match line.as_str() {
            "quit" => return Ok(()),
            "save" => {
                match game.save() {
                    Ok(()) => println!("Match saved."),
                    Err(e) => println!("Save failed: {}", e),
                }
                continue;
            }
            _ => {}
        }
        let Some((row, col)) = parse_coord(&line) else {
            println!("Invalid coordinate");
            continue;
        };
        if row >= game.grid_size() || col >= game.grid_size() {
            println!("Off the grid");
            continue;
        }
        let report = game
            .resolve_turn(rng, row, col)
            .map_err(|e| anyhow::anyhow!(e))?;
        println!(
            "You fired at {} -> {:?}",
            coord_label(row, col),
            report.player_shot
        );
        if let Some((shot, outcome)) = report.counter_shot {
            println!(
                "{} fired at {} -> {:?}",
                game.opponent().name(),
                coord_label(shot.row, shot.col),
                outcome
            );
        }
        if game.opponent().is_defeated() {
            println!();
            print_match_view(game);
            println!("\nVICTORY! You have sunk the whole enemy fleet.");
            return Ok(());
        }
        if game.player().is_defeated() {
            println!();
            print_match_view(game);
            println!("\nDEFEAT. All your vessels have been destroyed.");
            return Ok(());
        }
    }
}

#[cfg(feature = "std")]
fn auto(size: usize, level: Level, seed: Option<u64>) -> anyhow::Result<()> {
    check_size(size)?;
    let mut rng = make_rng(seed);
    let mut game = Match::new(size, level.into()).map_err(|e| anyhow::anyhow!(e))?;
    game.player_mut()
        .place_all_randomly(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    game.opponent_mut()
        .place_all_randomly(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    game.set_phase(Phase::Battle);

    // drive the human side with its own strategy instance
    let mut driver = strategy_for(level.into(), size);
    let mut turns = 0usize;
    let mut feedback = ShotOutcome::Water;
    while let Some(shot) = driver.next_shot(&mut rng, feedback) {
        turns += 1;
        let report = game
            .resolve_turn(&mut rng, shot.row, shot.col)
            .map_err(|e| anyhow::anyhow!(e))?;
        feedback = report.player_shot;
        if game.opponent().is_defeated() || game.player().is_defeated() {
            break;
        }
    }

    let winner = if game.opponent().is_defeated() {
        Some("player")
    } else if game.player().is_defeated() {
        Some("computer")
    } else {
        None
    };
    let summary = json!({
        "grid": size,
        "turns": turns,
        "winner": winner,
        "player_vessels_left": game.player().vessels_afloat(),
        "computer_vessels_left": game.opponent().combatant().vessels_afloat(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
