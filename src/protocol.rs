//! Line protocol spoken with an external game controller
//!
//! ```text
//! agent      -> <name>
//! controller -> 1 | 2                      color this agent plays
//! loop:
//!   controller -> SCORE <dark> <light>     or FINAL <dark> <light>
//!   controller -> [[0, 1, 2, ...], ...]    board rows, only after SCORE
//!   agent      -> <row> <col>              "0 0" when passing
//! ```
//!
//! The session ends after a `FINAL` line.

use std::io::{BufRead, Write};

use crate::board::{Board, Color, Move};
use crate::engine::OthelloEngine;
use crate::error::OthelloError;

/// Default name announced to the controller
pub const DEFAULT_NAME: &str = "Othello AI";

#[derive(thiserror::Error, Debug)]
pub enum ProtocolError {
    #[error("input ended while waiting for {0}")]
    UnexpectedEof(&'static str),

    #[error("malformed color line {0:?}")]
    MalformedColor(String),

    #[error("malformed status line {0:?} (expected SCORE or FINAL with two counts)")]
    MalformedStatus(String),

    #[error("malformed board line: {0}")]
    MalformedBoard(#[from] serde_json::Error),

    #[error(transparent)]
    Board(#[from] OthelloError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Game status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Game in progress, a board follows
    Score { dark: u32, light: u32 },
    /// Game over
    Final { dark: u32, light: u32 },
}

impl Status {
    pub fn counts(&self) -> (u32, u32) {
        match *self {
            Status::Score { dark, light } | Status::Final { dark, light } => (dark, light),
        }
    }
}

/// Parse a `SCORE d l` or `FINAL d l` line.
pub fn parse_status(line: &str) -> Result<Status, ProtocolError> {
    let malformed = || ProtocolError::MalformedStatus(line.trim().to_string());

    let mut parts = line.split_whitespace();
    let (Some(tag), Some(dark), Some(light), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    let dark = dark.parse().map_err(|_| malformed())?;
    let light = light.parse().map_err(|_| malformed())?;

    match tag {
        "SCORE" => Ok(Status::Score { dark, light }),
        "FINAL" => Ok(Status::Final { dark, light }),
        _ => Err(malformed()),
    }
}

/// Parse the color line (`1` dark, `2` light).
pub fn parse_color(line: &str) -> Result<Color, ProtocolError> {
    let value: u8 = line
        .trim()
        .parse()
        .map_err(|_| ProtocolError::MalformedColor(line.trim().to_string()))?;
    Ok(Color::try_from(value)?)
}

/// Parse a board line: a list of rows of `0`/`1`/`2`.
pub fn parse_board(line: &str) -> Result<Board, ProtocolError> {
    let rows: Vec<Vec<u8>> = serde_json::from_str(line.trim())?;
    Ok(Board::from_rows(&rows)?)
}

/// Render a move reply. A pass is sent as `0 0`.
pub fn format_move(mv: Option<Move>) -> String {
    match mv {
        Some(mv) => format!("{} {}", mv.row, mv.col),
        None => "0 0".to_string(),
    }
}

/// Line-oriented agent session.
pub struct Session<'a, R, W> {
    engine: &'a mut OthelloEngine,
    input: R,
    output: W,
    line: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(engine: &'a mut OthelloEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            line: String::new(),
        }
    }

    fn read_line(&mut self, expected: &'static str) -> Result<&str, ProtocolError> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(ProtocolError::UnexpectedEof(expected));
            }
            if !self.line.trim().is_empty() {
                return Ok(self.line.trim());
            }
        }
    }

    fn send(&mut self, text: &str) -> Result<(), ProtocolError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Run the whole session and return the final disc counts.
    pub fn run(&mut self, name: &str) -> Result<(u32, u32), ProtocolError> {
        self.send(name)?;

        let color = parse_color(self.read_line("color")?)?;
        log::info!("playing {}", color.name());

        loop {
            let status = parse_status(self.read_line("status")?)?;
            let (dark, light) = status.counts();
            log::debug!("status {:?}", status);

            if let Status::Final { .. } = status {
                log::info!("game over: dark {} light {}", dark, light);
                return Ok((dark, light));
            }

            let board = parse_board(self.read_line("board")?)?;
            let mv = self.engine.get_move(&board, color);
            self.send(&format_move(mv))?;
        }
    }
}

/// Convenience wrapper around [`Session::run`].
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut OthelloEngine,
    name: &str,
    input: R,
    output: W,
) -> Result<(u32, u32), ProtocolError> {
    Session::new(engine, input, output).run(name)
}
