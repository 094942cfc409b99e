use common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Reset,
    ToggleMode,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let word = line.trim().to_ascii_lowercase();
    match word.as_str() {
        "r" | "reset" => Ok(Command::Reset),
        "m" | "mode" => Ok(Command::ToggleMode),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err("Empty input".to_string()),
        other => match other.parse::<usize>() {
            Ok(index) if index < BOARD_SIZE => Ok(Command::Place(index)),
            Ok(index) => Err(format!("Cell {} does not exist, use 0-{}", index, BOARD_SIZE - 1)),
            Err(_) => Err(format!("Unknown command '{}'", other)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_parse() {
        for index in 0..BOARD_SIZE {
            assert_eq!(parse_command(&index.to_string()), Ok(Command::Place(index)));
        }
        assert_eq!(parse_command("  7 \n"), Ok(Command::Place(7)));
    }

    #[test]
    fn test_words_parse() {
        assert_eq!(parse_command("r"), Ok(Command::Reset));
        assert_eq!(parse_command("RESET"), Ok(Command::Reset));
        assert_eq!(parse_command("mode"), Ok(Command::ToggleMode));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_bad_input_is_rejected() {
        assert!(parse_command("").is_err());
        assert!(parse_command("9").is_err());
        assert!(parse_command("-1").is_err());
        assert!(parse_command("x").is_err());
    }
}
