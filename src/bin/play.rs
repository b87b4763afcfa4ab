//! Game runner binary.
//!
//! Bootstraps logging, runs one full game, and renders the scoreboard.

use clap::Parser;
use colored::Colorize;
use tenpin::dto::GameView;
use tenpin::game::Game;
use tenpin::game::Rules;
use tenpin::roll::Dice;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Run one multi-player tenpin game")]
struct Args {
    /// Seats at the lanes (1-10)
    #[arg(short, long, default_value_t = 2)]
    players: usize,
    /// Seed the dice for a replayable game
    #[arg(short, long)]
    seed: Option<u64>,
    /// Score doubles like plain strikes instead of stacking the flat bonus
    #[arg(long)]
    flat_double: bool,
    /// Emit the final scoreboard as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Log every roll as it lands
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tenpin::log(args.verbose);
    let rules = if args.flat_double {
        Rules::corrected()
    } else {
        Rules::default()
    };
    let ref mut dice = match args.seed {
        Some(seed) => Dice::seeded(seed),
        None => Dice::new(),
    };
    let mut game = Game::with_rules(args.players, rules)?;
    game.run(dice);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&GameView::from(&game))?);
    } else {
        print!("{}", game);
        if let Some(winner) = game.winner() {
            let seat = game
                .players()
                .iter()
                .position(|p| p.id() == winner.id())
                .unwrap_or(0);
            println!(
                "{}",
                format!(
                    "congratulations, seat {} wins with {}",
                    seat + 1,
                    winner.total()
                )
                .bright_green()
            );
        }
    }
    Ok(())
}
