pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod frame;
pub use frame::*;

pub mod player;
pub use player::*;

pub mod rules;
pub use rules::*;
