use super::error::GameError;
use super::frame::Frame;
use super::player::Player;
use super::rules::Rules;
use crate::FRAMES;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::PERFECT;
use crate::roll::source::RollSource;

/// The round loop. One `advance` bowls a frame for every player, re-grades
/// every card, and evaluates termination; `run` drives it to the end.
///
/// Rounds are strictly sequential and single-threaded: every seat bowls,
/// then every card is re-scored, then the game may close. Frame counts
/// therefore stay equal across seats at every observation point.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    rules: Rules,
    round: usize,
    finished: bool,
}

impl Game {
    pub fn new(players: usize) -> Result<Self, GameError> {
        Self::with_rules(players, Rules::default())
    }

    pub fn with_rules(players: usize, rules: Rules) -> Result<Self, GameError> {
        if players < MIN_PLAYERS || players > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(players));
        }
        Ok(Self {
            players: (0..players).map(|_| Player::new()).collect(),
            rules,
            round: 0,
            finished: false,
        })
    }

    /// Play rounds until a termination predicate fires.
    pub fn run(&mut self, dice: &mut dyn RollSource) {
        while !self.finished {
            self.advance(dice);
        }
    }

    /// Play exactly one round. A no-op once the game is finished.
    pub fn advance(&mut self, dice: &mut dyn RollSource) {
        if self.finished {
            return;
        }
        let last = self.round + 1 == FRAMES;
        for (seat, player) in self.players.iter_mut().enumerate() {
            let frame = Frame::bowl(dice, last);
            log::debug!("round {:>2} seat {} rolled {}", self.round + 1, seat, frame);
            player.push(frame);
        }
        for player in self.players.iter_mut() {
            player.grade(&self.rules);
        }
        self.finished = self.over();
        self.round += 1;
    }

    /// Nothing ends on the opening round; afterwards either the score
    /// threshold or the round cap closes the game. Both predicates are
    /// checked every round since either may fire first.
    fn over(&self) -> bool {
        if self.round == 0 {
            return false;
        }
        self.players.iter().any(|p| p.total() >= PERFECT) || self.round >= FRAMES - 1
    }

    /// Highest total wins; ties go to the earliest seat.
    pub fn winner(&self) -> Option<&Player> {
        if !self.finished {
            return None;
        }
        self.players
            .iter()
            .fold(None, |best: Option<&Player>, player| match best {
                Some(leader) if leader.total() >= player.total() => Some(leader),
                _ => Some(player),
            })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// Completed rounds so far.
    pub fn rounds(&self) -> usize {
        self.round
    }
    pub fn finished(&self) -> bool {
        self.finished
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (seat, player) in self.players.iter().enumerate() {
            writeln!(f, "seat {} ({})", seat + 1, player.id())?;
            for (i, frame) in player.frames().iter().enumerate() {
                writeln!(f, "  {:>2}  {}", i + 1, frame)?;
            }
            writeln!(f, "  total {}", player.total())?;
        }
        Ok(())
    }
}
