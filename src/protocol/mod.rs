//! Line-oriented text protocol.
//!
//! One command per line on stdin, replies on stdout. Every command that
//! changes the position answers with the new board diagram; failures answer
//! `error <message>` and leave the game untouched.
//!
//! ```text
//! > moves 5,0
//! moves 5,0-4,1
//! > move 5,0-4,1
//! played 5,0-4,1
//! board .b.b.b.b/b.b.b.b./.b.b.b.b/......../.w....../..w.w.w./.w.w.w.w/w.w.w.w. b
//! > status
//! status in-progress
//! ```

pub mod command;
pub mod output;

use std::io::{self, BufRead, Write};

use crate::board::{Board, MoveSequence, Square};
use crate::config::EngineOptions;
use crate::game::GameSession;

use command::{parse_command, Command};
use output::{
    format_bestmove, format_board, format_error, format_moves, format_played, format_status,
};

/// Protocol state: a single game session.
pub struct ProtocolHandler {
    session: GameSession,
}

impl Default for ProtocolHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        ProtocolHandler {
            session: GameSession::with_options(options),
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(e) = self.run_with(stdin.lock(), stdout.lock()) {
            engine_debug!("protocol loop ended: {e}");
        }
    }

    /// Drive the protocol over arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_command(&line) else {
                continue;
            };
            if cmd == Command::Quit {
                break;
            }
            if let Some(reply) = self.handle_command(&cmd) {
                for line in reply.lines() {
                    writeln!(output, "{line}")?;
                }
                output.flush()?;
            }
        }
        Ok(())
    }

    /// Handle one command, returning the reply lines.
    pub fn handle_command(&mut self, cmd: &Command) -> Option<String> {
        engine_trace!("command: {cmd:?}");
        match cmd {
            Command::Init | Command::Reset => {
                self.session.reset();
                Some(self.board_line())
            }
            Command::Board => Some(self.board_line()),
            Command::Position(text) => Some(self.handle_position(text)),
            Command::Moves(origin) => Some(self.handle_moves(origin.as_deref())),
            Command::Move(text) => Some(self.handle_move(text)),
            Command::Ai(depth) => Some(self.handle_ai(depth.as_deref())),
            Command::Undo => Some(match self.session.undo() {
                Ok(_) => self.board_line(),
                Err(e) => format_error(&e.to_string()),
            }),
            Command::Status => Some(format_status(self.session.status())),
            Command::SetOption { name, value } => {
                if self.session.options_mut().apply_setoption(name, value.as_deref()) {
                    Some("ok".to_string())
                } else {
                    Some(format_error("unknown option"))
                }
            }
            Command::Quit => None,
            Command::Unknown(line) => Some(format_error(&format!("unknown command: {line}"))),
        }
    }

    fn board_line(&self) -> String {
        format_board(self.session.board(), self.session.turn())
    }

    fn handle_position(&mut self, text: &str) -> String {
        let (board, turn) = match Board::from_diagram(text) {
            Ok(parsed) => parsed,
            Err(e) => return format_error(&e.to_string()),
        };
        match self.session.load_position(board, turn) {
            Ok(()) => self.board_line(),
            Err(e) => format_error(&e.to_string()),
        }
    }

    fn handle_moves(&self, origin: Option<&str>) -> String {
        let origin = match origin.map(str::parse::<Square>).transpose() {
            Ok(origin) => origin,
            Err(e) => return format_error(&e.to_string()),
        };
        format_moves(&self.session.legal_moves(origin))
    }

    fn handle_move(&mut self, text: &str) -> String {
        let seq = match text.parse::<MoveSequence>() {
            Ok(seq) => seq,
            Err(e) => return format_error(&e.to_string()),
        };
        match self.session.submit_move(&seq) {
            Ok(_) => format!("{}\n{}", format_played(&seq), self.board_line()),
            Err(e) => format_error(&e.to_string()),
        }
    }

    fn handle_ai(&mut self, depth: Option<&str>) -> String {
        let depth = match depth.map(str::parse::<u32>).transpose() {
            Ok(depth) => depth,
            Err(_) => return format_error("depth must be a number"),
        };
        match self.session.engine_move(depth) {
            Ok(Some(mv)) => format!("{}\n{}", format_bestmove(&mv), self.board_line()),
            Ok(None) => "nomove".to_string(),
            Err(e) => format_error(&e.to_string()),
        }
    }
}

/// Run the protocol on stdin/stdout with default options.
pub fn run() {
    let mut handler = ProtocolHandler::new();
    handler.run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn send(handler: &mut ProtocolHandler, line: &str) -> String {
        let cmd = parse_command(line).expect("non-empty command");
        handler.handle_command(&cmd).unwrap_or_default()
    }

    #[test]
    fn init_reports_starting_board() {
        let mut handler = ProtocolHandler::new();
        let reply = send(&mut handler, "init");
        assert_eq!(reply, format!("board {}", Board::new().to_diagram(Color::White)));
    }

    #[test]
    fn moves_from_square() {
        let mut handler = ProtocolHandler::new();
        assert_eq!(send(&mut handler, "moves 5,0"), "moves 5,0-4,1");
        assert_eq!(send(&mut handler, "moves 6,1"), "moves");
        assert!(send(&mut handler, "moves 9,9").starts_with("error "));
    }

    #[test]
    fn move_then_undo() {
        let mut handler = ProtocolHandler::new();
        let reply = send(&mut handler, "move 5,0-4,1");
        let mut lines = reply.lines();
        assert_eq!(lines.next(), Some("played 5,0-4,1"));
        assert!(lines.next().is_some_and(|l| l.starts_with("board ") && l.ends_with(" b")));
        assert_eq!(handler.session().turn(), Color::Black);

        let reply = send(&mut handler, "undo");
        assert!(reply.ends_with(" w"));
        assert_eq!(handler.session().board(), &Board::new());
    }

    #[test]
    fn illegal_move_keeps_state() {
        let mut handler = ProtocolHandler::new();
        assert!(send(&mut handler, "move 5,0-3,2").starts_with("error "));
        assert!(send(&mut handler, "move 2,1-3,0").starts_with("error "));
        assert!(send(&mut handler, "move nonsense").starts_with("error "));
        assert!(send(&mut handler, "undo").starts_with("error "));
        assert_eq!(handler.session().history_len(), 0);
    }

    #[test]
    fn ai_plays_and_reports() {
        let mut handler = ProtocolHandler::new();
        let reply = send(&mut handler, "ai 2");
        assert!(reply.starts_with("bestmove "));
        assert_eq!(handler.session().turn(), Color::Black);
        assert!(send(&mut handler, "ai 0").starts_with("error "));
        assert!(send(&mut handler, "ai x").starts_with("error "));
    }

    #[test]
    fn ai_without_moves() {
        let mut handler = ProtocolHandler::new();
        // White man in the corner, blocked by two Black men in a line.
        let reply = send(&mut handler, "position 8/8/8/8/8/2b5/1b6/w7 w");
        assert!(reply.starts_with("board "));
        assert_eq!(send(&mut handler, "moves"), "moves");
        assert_eq!(send(&mut handler, "ai"), "nomove");
        assert_eq!(send(&mut handler, "status"), "status in-progress");
        assert_eq!(handler.session().history_len(), 0);
    }

    #[test]
    fn position_rejects_bad_diagram() {
        let mut handler = ProtocolHandler::new();
        assert!(send(&mut handler, "position 8/8 w").starts_with("error "));
        assert_eq!(handler.session().board(), &Board::new());
    }

    #[test]
    fn setoption_replies() {
        let mut handler = ProtocolHandler::new();
        assert_eq!(send(&mut handler, "setoption name Depth value 2"), "ok");
        assert_eq!(handler.session().options().default_depth, 2);
        assert_eq!(
            send(&mut handler, "setoption name Hash value 16"),
            "error unknown option"
        );
    }

    #[test]
    fn run_with_stops_at_quit() {
        let mut handler = ProtocolHandler::new();
        let input = b"board\n\nstatus\nquit\nstatus\n";
        let mut out = Vec::new();
        handler.run_with(&input[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "status in-progress");
    }
}
