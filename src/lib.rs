//! Multi-player tenpin dice game with carry-over scoring.
//!
//! The engine in [`game`] reproduces a legacy scorer faithfully, quirks
//! included; [`game::Rules`] carries the one switch that trades fidelity
//! for fairness. Randomness is injected through [`roll::RollSource`], so
//! every game can be replayed or scripted.

pub mod dto;
pub mod game;
pub mod roll;

/// Pin counts for a single roll. Signed so the roll-cap subtraction stays
/// total even against a source that ignores its bound.
pub type Pins = i16;
/// Frame scores and running totals.
pub type Score = i16;

/// Pins standing at the top of a frame; a first roll of this many is a strike.
pub const PINS: Pins = 10;
/// Exclusive upper bound handed to the source for an uncapped roll.
pub const ROLL_BOUND: Pins = PINS + 1;
/// Rounds in a full game.
pub const FRAMES: usize = 10;
/// Any total at or past this ends the game before the round cap.
pub const PERFECT: Score = 300;
/// Fewest seats a game can open with.
pub const MIN_PLAYERS: usize = 1;
/// Most seats a game can open with.
pub const MAX_PLAYERS: usize = 10;

/// Initialize terminal logging. Debug level surfaces every roll as it lands.
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
