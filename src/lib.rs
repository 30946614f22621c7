//! Rules engine and move search for Vatikan, a two player tile-laying card game.
//!
//! Players empty their hands by laying cards onto a shared board of groups.
//! Every group must end the turn as either a triplet (one rank, distinct
//! suits) or a flush (one suit, a contiguous run in cyclic rank order).

pub mod cards;
pub mod gameplay;
pub mod groups;
pub mod players;
pub mod search;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table.
pub type Position = usize;

// ============================================================================
// DECK GEOMETRY
// ============================================================================
/// Ranks in the cyclic order, Two through Ace.
pub const N_RANKS: usize = 13;
/// Suits in play.
pub const N_SUITS: usize = 4;
/// Physical copies of every (rank, suit) in the deck.
pub const N_COPIES: usize = 2;
/// Cards in a full deck.
pub const DECK_SIZE: usize = N_RANKS * N_SUITS * N_COPIES;

// ============================================================================
// GROUP RULES
// ============================================================================
/// Smallest legal group, for both triplets and flushes.
pub const MIN_GROUP: usize = 3;
/// Largest legal triplet (one card per suit).
pub const MAX_TRIPLET: usize = N_SUITS;
/// Groups at least this large may lend an end card to a new group.
pub const LARGE_GROUP: usize = 4;
/// A flush holding every rank cannot grow any further.
pub const FULL_GROUP: usize = N_RANKS;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Cards dealt to each player before the first turn.
pub const STARTING_HAND: usize = 12;
/// Empty groups laid out on a fresh board (2 rows of 18 columns).
pub const BOARD_GROUPS: usize = 36;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Maximum number of new groups the exhaustive search stacks before giving up.
pub const EXHAUSTIVE_DEPTH: usize = 4;

// ============================================================================
// PRESENTATION
// ============================================================================
/// Pause between robot turns when two robots play each other.
pub const ROBOT_DELAY_MS: u64 = 100;
/// Display names of the two robot seats.
pub const ROBOT_NAMES: [&str; N] = ["Albert BOT", "Zuzka BOT"];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
