use std::io::Write;

use common::games::tictactoe::{ChannelBroadcaster, SessionEvent, TicTacToeSession};
use common::log_debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::input::{Command, parse_command};
use crate::renderer::{HELP, render_game_over, render_snapshot};

fn emit(output: &mut impl Write, text: &str) -> Result<(), String> {
    writeln!(output, "{}", text)
        .and_then(|_| output.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}

/// Feeds commands from `input` to the session and prints every session event
/// to `output` until the input ends or the player quits.
pub async fn run_game<R, W>(
    session: TicTacToeSession<ChannelBroadcaster>,
    mut events: UnboundedReceiver<SessionEvent>,
    input: R,
    output: &mut W,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    emit(output, HELP)?;
    session.publish().await;

    loop {
        tokio::select! {
            biased;

            Some(event) = events.recv() => match event {
                SessionEvent::State(snapshot) => emit(output, &render_snapshot(&snapshot))?,
                SessionEvent::GameOver(notification) => {
                    emit(output, &render_game_over(&notification))?
                }
            },
            line = lines.next_line() => {
                let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                let Some(line) = line else {
                    break;
                };

                match parse_command(&line) {
                    Ok(Command::Place(index)) => {
                        if !session.submit_move(index).await {
                            let snapshot = session.snapshot().await;
                            emit(output, &format!("Can't play {} now. {}", index, snapshot.status_text()))?;
                        }
                    }
                    Ok(Command::Reset) => session.reset().await,
                    Ok(Command::ToggleMode) => session.toggle_mode().await,
                    Ok(Command::Help) => emit(output, HELP)?,
                    Ok(Command::Quit) => break,
                    Err(e) => {
                        log_debug!("Bad input {:?}: {}", line, e);
                        emit(output, &format!("{}. Type 'h' for help.", e))?;
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use common::games::SessionRng;
    use common::games::tictactoe::{GameMode, TicTacToeSessionState};

    async fn play(mode: GameMode, script: &str) -> String {
        let state = TicTacToeSessionState::create(
            "runner-test",
            mode,
            Duration::from_millis(500),
            SessionRng::new(7),
        );
        let (broadcaster, events) = ChannelBroadcaster::new();
        let session = TicTacToeSession::new(state, broadcaster);
        let mut output = Vec::new();
        run_game(session, events, script.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_two_humans_play_to_a_win() {
        let output = play(GameMode::HumanVsHuman, "0\n4\n1\n3\n2\n5\nq\n").await;
        assert!(output.contains("Playing vs Human"));
        assert!(output.contains("Winner: X"));
        assert!(output.contains("Player X wins!"));
        assert!(output.contains("Can't play 5 now. Winner: X"));
    }

    #[tokio::test]
    async fn test_bad_input_gets_a_hint() {
        let output = play(GameMode::HumanVsHuman, "banana\n12\nq\n").await;
        assert!(output.contains("Unknown command 'banana'. Type 'h' for help."));
        assert!(output.contains("Cell 12 does not exist"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_move_while_computer_thinks_is_refused() {
        let output = play(GameMode::HumanVsOpponent, "0\n1\nq\n").await;
        assert!(output.contains("Computer is thinking..."));
        assert!(output.contains("Can't play 1 now. Computer is thinking..."));
    }

    #[tokio::test]
    async fn test_mode_toggle_and_reset_render() {
        let output = play(GameMode::HumanVsOpponent, "m\n4\nr\nq\n").await;
        assert!(output.contains("Playing vs Computer"));
        assert!(output.contains("Playing vs Human"));
        assert!(output.matches("Next player: X").count() >= 3);
    }
}
