use crate::Pins;
use crate::Score;
use crate::game::engine::Game;
use crate::game::frame::Frame;
use crate::game::player::Player;
use serde::Deserialize;
use serde::Serialize;

/// Read-only snapshots of engine state for presentation layers. A score in
/// a snapshot is only final once `finished` is set; until then carry-over
/// scoring may still move it.
#[derive(Debug, Serialize, Deserialize)]
pub struct FrameView {
    pub rolls: Vec<Pins>,
    pub kind: Option<String>,
    pub score: Score,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: String,
    pub frames: Vec<FrameView>,
    pub total: Score,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameView {
    pub rounds: usize,
    pub finished: bool,
    pub players: Vec<PlayerView>,
    pub winner: Option<String>,
}

impl From<&Frame> for FrameView {
    fn from(frame: &Frame) -> Self {
        Self {
            rolls: frame.rolls().to_vec(),
            kind: frame.kind().map(|k| k.name().to_string()),
            score: frame.score(),
        }
    }
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().to_string(),
            frames: player.frames().iter().map(FrameView::from).collect(),
            total: player.total(),
        }
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            rounds: game.rounds(),
            finished: game.finished(),
            players: game.players().iter().map(PlayerView::from).collect(),
            winner: game.winner().map(|p| p.id().to_string()),
        }
    }
}
