use common::games::tictactoe::{
    BOARD_WIDTH, GameOverNotification, GameSnapshot, GameStatus, Mark,
};

pub const HELP: &str = "\
Commands:
  0-8       place your mark (cells are numbered left to right, top to bottom)
  r, reset  start over
  m, mode   switch between playing the computer and a friend (starts over)
  h, help   show this text
  q, quit   leave";

/// Draws the board with free cells showing their index, followed by the
/// mode label and the status line.
pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let winning_line = snapshot.winning_line();
    let mut rows = Vec::with_capacity(BOARD_WIDTH);

    for row in 0..BOARD_WIDTH {
        let cells: Vec<String> = (0..BOARD_WIDTH)
            .map(|col| {
                let index = row * BOARD_WIDTH + col;
                let mark = snapshot.board.get(index).unwrap_or(Mark::Empty);
                let highlighted = winning_line.is_some_and(|line| line.contains(index));
                match mark {
                    Mark::Empty => format!(" {} ", index),
                    mark if highlighted => format!("[{}]", mark),
                    mark => format!(" {} ", mark),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    format!(
        "\n{}\n\n{}\n{}",
        rows.join("\n---+---+---\n"),
        snapshot.mode.label(),
        snapshot.status_text()
    )
}

pub fn render_game_over(notification: &GameOverNotification) -> String {
    match notification.status {
        GameStatus::Won(mark) => format!("Player {} wins! Type 'r' to play again.", mark),
        GameStatus::Draw => "It's a draw! Type 'r' to play again.".to_string(),
        GameStatus::InProgress => String::new(),
    }
}
