// Console prompts for the human player

use crate::error::GameError;
use crate::types::Direction;
use log::warn;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Splits console input into whitespace-separated words, so several
/// answers may be typed on one line
pub struct TokenReader<I> {
    input: I,
    pending: VecDeque<String>,
}

impl<I: BufRead> TokenReader<I> {
    pub fn new(input: I) -> Self {
        TokenReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// The next word, reading more lines as needed
    pub fn next_token(&mut self) -> Result<String, GameError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

pub fn parse_answer(answer: &str) -> Result<bool, GameError> {
    match answer.trim().to_uppercase().as_str() {
        "Y" | "YES" => Ok(true),
        "N" | "NO" => Ok(false),
        _ => Err(GameError::InvalidAnswer(answer.trim().to_string())),
    }
}

/// Asks until a Y or N answer is given
pub fn prompt_yes_no<I: BufRead, W: Write>(
    input: &mut TokenReader<I>,
    out: &mut W,
    question: &str,
) -> Result<bool, GameError> {
    loop {
        write!(out, "{} Answer with Y or N --> ", question)?;
        out.flush()?;
        match parse_answer(&input.next_token()?) {
            Ok(answer) => return Ok(answer),
            Err(GameError::InvalidAnswer(bad)) => warn!("Ignoring answer '{}'", bad),
            Err(e) => return Err(e),
        }
    }
}

/// Asks until one of U, D, L or R is given
pub fn prompt_direction<I: BufRead, W: Write>(
    input: &mut TokenReader<I>,
    out: &mut W,
    name: &str,
) -> Result<Direction, GameError> {
    loop {
        write!(
            out,
            "Which direction will {} move? Answer with U (Up), D (Down), L (Left), R (Right) --> ",
            name
        )?;
        out.flush()?;
        match input.next_token()?.parse::<Direction>() {
            Ok(direction) => return Ok(direction),
            Err(GameError::InvalidDirection(bad)) => warn!("Ignoring direction '{}'", bad),
            Err(e) => return Err(e),
        }
    }
}
