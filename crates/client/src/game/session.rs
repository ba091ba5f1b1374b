use crate::error::InvalidDimensions;
use common::board::{Board, Side};
use common::model::{GameId, NewGameRequest, NewGameResponse, PlayReply};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished(Side),
}

/// Something the player has to acknowledge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Rejected(String),
    GameOver(Side),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Rejected(message) => message.clone(),
            Notice::GameOver(side) => format!("Game Over! Winner: {side}"),
        }
    }
}

/// Everything the board page shows. The server is the only source of board,
/// turn and winner; this type only records what it last said.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub rows_input: String,
    pub cols_input: String,
    pub board: Board,
    pub turn: Side,
    pub phase: Phase,
    pub game_id: Option<GameId>,
    pub notice: Option<Notice>,
    pub notice_seq: u32,
    pub status: Option<String>,
}

#[derive(Debug)]
pub enum BoardAction {
    SetRows(String),
    SetCols(String),
    Started(NewGameResponse),
    Played { game_id: GameId, reply: PlayReply },
    Failed(String),
    NoticeShown(u32),
}

fn parse_dimension(field: &'static str, value: &str) -> Result<u32, InvalidDimensions> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InvalidDimensions {
            field,
            value: value.to_owned(),
        }),
    }
}

impl BoardView {
    pub fn new(rows: u32, cols: u32) -> Self {
        BoardView {
            rows_input: rows.to_string(),
            cols_input: cols.to_string(),
            board: Board::default(),
            turn: Side::default(),
            phase: Phase::NotStarted,
            game_id: None,
            notice: None,
            notice_seq: 0,
            status: None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn new_game_request(&self) -> Result<NewGameRequest, InvalidDimensions> {
        Ok(NewGameRequest {
            rows: parse_dimension("Rows", &self.rows_input)?,
            cols: parse_dimension("Columns", &self.cols_input)?,
        })
    }

    /// Session a click in `col` should be sent to. `None` means the click is
    /// dropped without a request: there is no game yet, or it is over.
    pub fn move_target(&self, col: usize) -> Option<GameId> {
        if self.phase != Phase::InProgress || col >= self.board.cols() {
            return None;
        }
        self.game_id.clone()
    }

    fn raise(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_seq = self.notice_seq.wrapping_add(1);
    }

    fn apply_reply(&mut self, game_id: GameId, reply: PlayReply) {
        if self.game_id.as_ref() != Some(&game_id) || self.phase != Phase::InProgress {
            log::debug!("dropping reply for stale game {game_id}");
            return;
        }
        match reply {
            PlayReply::Rejected(message) => {
                log::info!("move rejected: {message}");
                self.raise(Notice::Rejected(message));
            }
            PlayReply::Moved {
                board,
                turn,
                outcome,
            } => {
                self.board = board;
                self.turn = turn;
                self.status = None;
                if let Some(side) = outcome.winner() {
                    log::info!("game {game_id} won by {side}");
                    self.phase = Phase::Finished(side);
                    self.raise(Notice::GameOver(side));
                }
            }
        }
    }
}

/// Closes a session to further clicks as soon as its winning reply arrives,
/// before the view holding `Phase::Finished` has been rendered.
#[derive(Debug, Default)]
pub struct MoveGate {
    closed: Option<GameId>,
}

impl MoveGate {
    pub fn record(&mut self, game_id: &GameId, reply: &PlayReply) {
        if let PlayReply::Moved { outcome, .. } = reply {
            if outcome.winner().is_some() {
                self.closed = Some(game_id.clone());
            }
        }
    }

    pub fn allows(&self, game_id: &GameId) -> bool {
        self.closed.as_ref() != Some(game_id)
    }
}

impl Reducible for BoardView {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = (*self).clone();

        match action {
            BoardAction::SetRows(value) => view.rows_input = value,
            BoardAction::SetCols(value) => view.cols_input = value,
            BoardAction::Started(NewGameResponse { board, game_id }) => {
                log::info!(
                    "started game {game_id} on a {}x{} board",
                    board.rows(),
                    board.cols()
                );
                view.board = board;
                view.turn = Side::default();
                view.phase = Phase::InProgress;
                view.game_id = Some(game_id);
                view.notice = None;
                view.status = None;
            }
            BoardAction::Played { game_id, reply } => view.apply_reply(game_id, reply),
            BoardAction::Failed(message) => view.status = Some(message),
            BoardAction::NoticeShown(seq) => {
                if seq == view.notice_seq {
                    view.notice = None;
                }
            }
        }

        view.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::board::Cell;
    use common::model::Outcome;
    use pretty_assertions::assert_eq;

    fn reduce(view: BoardView, action: BoardAction) -> BoardView {
        (*Rc::new(view).reduce(action)).clone()
    }

    fn started(rows: usize, cols: usize, id: &str) -> BoardView {
        reduce(
            BoardView::new(rows as u32, cols as u32),
            BoardAction::Started(NewGameResponse {
                board: Board::empty(rows, cols),
                game_id: GameId::new(id),
            }),
        )
    }

    fn board_with(rows: usize, cols: usize, taken: &[(usize, usize, Side)]) -> Board {
        let mut grid = vec![vec![Cell::Empty; cols]; rows];
        for &(row, col, side) in taken {
            grid[row][col] = Cell::Taken(side);
        }
        Board::try_from(grid).unwrap()
    }

    fn moved(id: &str, board: Board, turn: Side, outcome: Outcome) -> BoardAction {
        BoardAction::Played {
            game_id: GameId::new(id),
            reply: PlayReply::Moved {
                board,
                turn,
                outcome,
            },
        }
    }

    #[test]
    fn fresh_view_has_no_game() {
        let view = BoardView::new(6, 5);
        assert_eq!(view.phase, Phase::NotStarted);
        assert_eq!(view.move_target(0), None);
        assert_eq!(view.new_game_request(), Ok(NewGameRequest { rows: 6, cols: 5 }));
    }

    #[test]
    fn new_game_resets_state() {
        let view = started(6, 5, "abc");
        assert_eq!(view.phase, Phase::InProgress);
        assert_eq!((view.board.rows(), view.board.cols()), (6, 5));
        assert!(view.board.is_clear());
        assert_eq!(view.turn, Side::Human);
        assert_eq!(view.winner(), None);
        assert_eq!(view.game_id, Some(GameId::new("abc")));
    }

    #[test]
    fn move_in_progress() {
        let view = started(6, 5, "abc");
        assert_eq!(view.move_target(2), Some(GameId::new("abc")));

        let board = board_with(6, 5, &[(5, 2, Side::Human), (5, 3, Side::Computer)]);
        let view = reduce(
            view,
            moved("abc", board.clone(), Side::Computer, Outcome::InProgress),
        );
        assert_eq!(view.board, board);
        assert_eq!(view.turn, Side::Computer);
        assert_eq!(view.phase, Phase::InProgress);
        assert_eq!(view.notice, None);
    }

    #[test]
    fn rejection_keeps_board() {
        let board = board_with(6, 5, &[(5, 0, Side::Human)]);
        let view = reduce(
            started(6, 5, "abc"),
            moved("abc", board.clone(), Side::Human, Outcome::InProgress),
        );
        let before = view.clone();
        let view = reduce(
            view,
            BoardAction::Played {
                game_id: GameId::new("abc"),
                reply: PlayReply::Rejected("Invalid column.".into()),
            },
        );
        assert_eq!(view.board, before.board);
        assert_eq!(view.turn, before.turn);
        assert_eq!(view.phase, Phase::InProgress);
        assert_eq!(view.notice, Some(Notice::Rejected("Invalid column.".into())));
        assert_eq!(view.notice_seq, before.notice_seq + 1);
    }

    #[test]
    fn win_finishes_the_game() {
        for side in [Side::Human, Side::Computer] {
            let board = board_with(1, 4, &[(0, 0, side), (0, 1, side), (0, 2, side), (0, 3, side)]);
            let view = reduce(
                started(1, 4, "abc"),
                moved("abc", board.clone(), Side::Human, Outcome::Won(side)),
            );
            assert_eq!(view.phase, Phase::Finished(side));
            assert_eq!(view.winner(), Some(side));
            assert_eq!(view.board, board);
            assert_eq!(view.notice, Some(Notice::GameOver(side)));
            assert_eq!(view.move_target(0), None);
        }
    }

    #[test]
    fn gate_closes_on_win_before_render() {
        let view = started(1, 4, "abc");
        let mut gate = MoveGate::default();
        let game_id = view.move_target(0).unwrap();
        assert!(gate.allows(&game_id));

        gate.record(
            &game_id,
            &PlayReply::Moved {
                board: Board::empty(1, 4),
                turn: Side::Computer,
                outcome: Outcome::InProgress,
            },
        );
        assert!(gate.allows(&game_id));

        gate.record(&game_id, &PlayReply::Rejected("Invalid column.".into()));
        assert!(gate.allows(&game_id));

        gate.record(
            &game_id,
            &PlayReply::Moved {
                board: Board::empty(1, 4),
                turn: Side::Human,
                outcome: Outcome::Won(Side::Human),
            },
        );
        // The rendered view still says InProgress, but the gate is shut.
        assert_eq!(view.move_target(0), Some(game_id.clone()));
        assert!(!gate.allows(&game_id));
        assert!(gate.allows(&GameId::new("def")));
    }

    #[test]
    fn outcome_winner() {
        assert_eq!(Outcome::InProgress.winner(), None);
        assert_eq!(Outcome::Won(Side::Computer).winner(), Some(Side::Computer));
    }

    #[test]
    fn finished_game_ignores_late_replies() {
        let won = board_with(1, 4, &[(0, 0, Side::Computer)]);
        let view = reduce(
            started(1, 4, "abc"),
            moved("abc", won, Side::Human, Outcome::Won(Side::Computer)),
        );
        let before = view.clone();
        let view = reduce(
            view,
            moved("abc", Board::empty(1, 4), Side::Computer, Outcome::InProgress),
        );
        assert_eq!(view, before);
    }

    #[test]
    fn stale_session_is_ignored() {
        let view = started(6, 5, "new");
        let before = view.clone();
        let view = reduce(
            view,
            moved(
                "old",
                board_with(6, 5, &[(5, 0, Side::Human)]),
                Side::Computer,
                Outcome::Won(Side::Human),
            ),
        );
        assert_eq!(view, before);
    }

    #[test]
    fn new_game_after_finish() {
        let view = reduce(
            started(1, 4, "abc"),
            moved("abc", Board::empty(1, 4), Side::Human, Outcome::Won(Side::Human)),
        );
        let view = reduce(
            view,
            BoardAction::Started(NewGameResponse {
                board: Board::empty(7, 6),
                game_id: GameId::new("def"),
            }),
        );
        assert_eq!(view.phase, Phase::InProgress);
        assert_eq!(view.winner(), None);
        assert_eq!(view.notice, None);
        assert_eq!(view.move_target(5), Some(GameId::new("def")));
    }

    #[test]
    fn failure_only_sets_status() {
        let view = started(6, 5, "abc");
        let before = view.clone();
        let view = reduce(view, BoardAction::Failed("request failed".into()));
        assert_eq!(view.status.as_deref(), Some("request failed"));
        assert_eq!(view.board, before.board);
        assert_eq!(view.phase, before.phase);
        assert_eq!(view.game_id, before.game_id);
    }

    #[test]
    fn dimensions_must_be_positive() {
        let view = reduce(BoardView::new(6, 5), BoardAction::SetRows("0".into()));
        assert_eq!(
            view.new_game_request(),
            Err(InvalidDimensions {
                field: "Rows",
                value: "0".into()
            })
        );
        let view = reduce(view, BoardAction::SetRows(" 8 ".into()));
        let view = reduce(view, BoardAction::SetCols("".into()));
        assert_eq!(view.new_game_request().unwrap_err().field, "Columns");
        let view = reduce(view, BoardAction::SetCols("7".into()));
        assert_eq!(view.new_game_request(), Ok(NewGameRequest { rows: 8, cols: 7 }));
    }

    #[test]
    fn notice_is_cleared_once_shown() {
        let view = reduce(
            started(6, 5, "abc"),
            BoardAction::Played {
                game_id: GameId::new("abc"),
                reply: PlayReply::Rejected("Invalid column.".into()),
            },
        );
        let seq = view.notice_seq;
        let view = reduce(view, BoardAction::NoticeShown(seq.wrapping_sub(1)));
        assert!(view.notice.is_some());
        let view = reduce(view, BoardAction::NoticeShown(seq));
        assert_eq!(view.notice, None);
    }

    #[test]
    fn notice_text() {
        assert_eq!(
            Notice::GameOver(Side::Computer).message(),
            "Game Over! Winner: Computer"
        );
        assert_eq!(
            Notice::GameOver(Side::Human).message(),
            "Game Over! Winner: Human Player"
        );
    }
}
