use crate::PINS;
use crate::Pins;
use crate::ROLL_BOUND;
use crate::Score;
use crate::game::rules::Rules;
use crate::roll::source::RollSource;
use colored::Colorize;

/// How a frame settles once its rolls are in.
///
/// `Double` is positional: a strike-qualifying frame immediately behind a
/// `Strike`. A ten thrown behind a `Double` opens a fresh `Strike` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Open,
    Spare,
    Strike,
    Double,
}

impl FrameKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Spare => "spare",
            Self::Strike => "strike",
            Self::Double => "double",
        }
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "-"),
            Self::Spare => write!(f, "{}", "/".green()),
            Self::Strike => write!(f, "{}", "X".yellow()),
            Self::Double => write!(f, "{}", "XX".red()),
        }
    }
}

/// One player's turn within a round: one to three rolls, a kind once
/// classified, and a score that keeps moving until the following frame has
/// rolls of its own.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    rolls: Vec<Pins>,
    kind: Option<FrameKind>,
    score: Score,
}

impl Frame {
    /// Roll out a full frame against the given source.
    ///
    /// Non-final rounds: one roll for a strike, two otherwise, the second
    /// capped by the complement of the first. The final round always takes
    /// three; a standing sum of ten or more earns an uncapped bonus roll.
    pub fn bowl(dice: &mut dyn RollSource, last: bool) -> Self {
        let mut frame = Self::default();
        let first = dice.next(ROLL_BOUND);
        frame.rolls.push(first);
        if !last {
            if first != PINS {
                frame.rolls.push(dice.next(ROLL_BOUND - first));
            }
        } else {
            if first >= PINS {
                frame.rolls.push(dice.next(ROLL_BOUND));
            } else {
                frame.rolls.push(dice.next(ROLL_BOUND - first));
            }
            if frame.pins() >= PINS {
                frame.rolls.push(dice.next(ROLL_BOUND));
            } else {
                // the closing cap complements the opening roll, not the
                // two-roll pinfall
                frame.rolls.push(dice.next(ROLL_BOUND - first));
            }
        }
        frame
    }

    /// First roll, or zero while the frame is still empty.
    pub fn first(&self) -> Pins {
        self.rolls.first().copied().unwrap_or(0)
    }
    /// Pinfall of the first two rolls.
    pub fn pair(&self) -> Pins {
        self.rolls.iter().take(2).sum()
    }
    /// Pinfall of the whole frame.
    pub fn pins(&self) -> Pins {
        self.rolls.iter().sum()
    }
    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }
    pub fn kind(&self) -> Option<FrameKind> {
        self.kind
    }
    pub fn score(&self) -> Score {
        self.score
    }

    /// Classify this frame given the kind of the frame before it.
    pub fn classify(&self, prev: Option<FrameKind>) -> FrameKind {
        if self.first() == PINS {
            if prev == Some(FrameKind::Strike) {
                FrameKind::Double
            } else {
                FrameKind::Strike
            }
        } else if self.pair() == PINS {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    pub(crate) fn grade(&mut self, prev: Option<FrameKind>) {
        self.kind = Some(self.classify(prev));
    }

    /// Recompute the carry-over score from the following frame's opening
    /// roll and first-two pinfall, when that frame exists yet. Absent
    /// neighbors contribute nothing; they are never an error.
    pub(crate) fn rescore(&mut self, next: Option<(Pins, Pins)>, rules: &Rules) {
        let head = next.map(|(first, _)| first).unwrap_or(0);
        let pair = next.map(|(_, pair)| pair).unwrap_or(0);
        self.score = match self.kind {
            Some(FrameKind::Spare) => self.pins() + head,
            Some(FrameKind::Strike) => self.pins() + pair,
            // the legacy double stacks a flat ten on top of rolls that
            // already contain the strike
            Some(FrameKind::Double) if rules.double_stacking => PINS + self.pins() + pair,
            Some(FrameKind::Double) => self.pins() + pair,
            _ => self.pins(),
        };
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rolls = self
            .rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",");
        match self.kind {
            Some(kind) => write!(f, "{:<8} {:<2} {:>3}", rolls, kind, self.score),
            None => write!(f, "{:<8}", rolls),
        }
    }
}
