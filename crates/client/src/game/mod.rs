mod session;

pub use session::{BoardAction, BoardView, MoveGate, Notice, Phase};
