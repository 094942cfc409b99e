mod board;
mod bot_controller;
mod broadcaster;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, BOARD_WIDTH, Board, is_legal_move};
pub use bot_controller::{BotInput, calculate_move};
pub use broadcaster::{ChannelBroadcaster, GameBroadcaster, GameOverNotification, SessionEvent};
pub use game_state::{GameSnapshot, PendingReply, TicTacToeGameState};
pub use session::{TicTacToeSession, TicTacToeSessionState};
pub use types::{GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, is_draw};
