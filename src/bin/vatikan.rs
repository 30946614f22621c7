//! Vatikan at the terminal
//!
//! Seats humans and robots around one game and runs turns until someone
//! empties their hand or nobody can move.

use clap::Parser;
use vatikan::gameplay::Config;
use vatikan::gameplay::Game;
use vatikan::players::Mode;
use vatikan::search::Strategy;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::default(), help = "Who sits in each seat")]
    mode: Mode,
    #[arg(long, help = "Fix the shuffle")]
    seed: Option<u64>,
    #[arg(long, help = "Plan with the backtracking search instead of the greedy one")]
    exhaustive: bool,
    #[arg(long, default_value_t = vatikan::EXHAUSTIVE_DEPTH, help = "New groups the backtracking search may stack")]
    depth: usize,
    #[arg(long, default_value_t = vatikan::STARTING_HAND, help = "Cards dealt to each player")]
    hand_size: usize,
    #[arg(long, help = "Print every turn's suggested plan as a JSON line")]
    json: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            hand_size: args.hand_size,
            board_groups: vatikan::BOARD_GROUPS,
            strategy: match args.exhaustive {
                true => Strategy::Exhaustive { depth: args.depth },
                false => Strategy::Greedy,
            },
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    vatikan::log();
    let args = Args::parse();
    let config = Config::from(&args);
    let seats = args.mode.seats();
    let mut game = Game::new(&config);
    log::info!(
        "{} with {} search: {:?} vs {:?}",
        args.mode,
        config.strategy,
        seats[0],
        seats[1]
    );
    loop {
        let seat = &seats[game.actor()];
        if args.json {
            let plan = game.strategy().plan(&game.snapshot());
            println!("{}", serde_json::to_string(&plan)?);
        }
        seat.play(&mut game)?;
        if let Some(winner) = game.winner() {
            log::info!("{} wins", seats[winner].name());
            break;
        }
        if game.is_stalled() {
            log::info!("nobody can move and the deck is empty");
            break;
        }
        if args.mode.is_unattended() {
            std::thread::sleep(std::time::Duration::from_millis(vatikan::ROBOT_DELAY_MS));
        }
    }
    log::info!("final board\n{}", game.board());
    Ok(())
}
