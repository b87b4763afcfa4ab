use super::frame::Frame;
use super::rules::Rules;
use crate::Pins;
use crate::Score;

/// One bowler: a stable identity and the frames they have thrown so far.
/// Frames are only ever appended, one per round.
#[derive(Debug, Clone)]
pub struct Player {
    id: uuid::Uuid,
    frames: Vec<Frame>,
}

impl Player {
    pub(crate) fn new() -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            frames: Vec::new(),
        }
    }

    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Live sum of frame scores. Never cached: earlier frames keep moving
    /// while later frames are still being thrown.
    pub fn total(&self) -> Score {
        self.frames.iter().map(|f| f.score()).sum()
    }

    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Classify the newest frame against its predecessor, then walk the
    /// whole card and recompute every carry-over score from current state.
    pub(crate) fn grade(&mut self, rules: &Rules) {
        if let Some(newest) = self.frames.len().checked_sub(1) {
            let prev = newest.checked_sub(1).and_then(|i| self.frames[i].kind());
            self.frames[newest].grade(prev);
        }
        let peeks = self
            .frames
            .iter()
            .map(|f| (f.first(), f.pair()))
            .collect::<Vec<(Pins, Pins)>>();
        for (i, frame) in self.frames.iter_mut().enumerate() {
            frame.rescore(peeks.get(i + 1).copied(), rules);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::frame::FrameKind;
    use crate::roll::script::Script;

    #[test]
    fn grading_classifies_the_newest_and_rescores_the_rest() {
        let ref rules = Rules::default();
        let mut player = Player::new();

        player.push(Frame::bowl(&mut Script::new([10]), false));
        player.grade(rules);
        assert_eq!(player.frames()[0].kind(), Some(FrameKind::Strike));
        assert_eq!(player.total(), 10);

        player.push(Frame::bowl(&mut Script::new([10]), false));
        player.grade(rules);
        assert_eq!(player.frames()[1].kind(), Some(FrameKind::Double));
        // the opening strike now carries its successor's pinfall
        assert_eq!(player.frames()[0].score(), 20);
        assert_eq!(player.frames()[1].score(), 20);
        assert_eq!(player.total(), 40);
    }

    #[test]
    fn totals_follow_frame_scores() {
        let ref rules = Rules::default();
        let mut player = Player::new();
        for rolls in [[3, 4], [5, 2], [0, 0]] {
            player.push(Frame::bowl(&mut Script::new(rolls), false));
            player.grade(rules);
            let sum = player.frames().iter().map(|f| f.score()).sum::<Score>();
            assert_eq!(player.total(), sum);
        }
        assert_eq!(player.total(), 14);
    }
}
