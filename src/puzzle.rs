use std::{fmt::Display, num::ParseIntError, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

/// Labelled results of one puzzle run, in the order they are printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    parts: Vec<(&'static str, String)>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part(mut self, label: &'static str, value: impl Display) -> Self {
        self.parts.push((label, value.to_string()));
        self
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(_, value)| value.as_str())
    }
}

impl Display for Answers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, value) in &self.parts {
            writeln!(f, "{label}: {value}")?;
        }

        Ok(())
    }
}

/// One day's solver: pure text in, answers out.
pub trait Solution: Sync {
    fn id(&self) -> PuzzleId;

    fn title(&self) -> &'static str;

    fn solve(&self, input: &str) -> Result<Answers, ParseError>;
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("line {line}: `{text}` is not a valid number: {source}")]
    InvalidNumber {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("missing {0} section")]
    MissingSection(&'static str),

    #[error("couldn't evaluate expression: {0}")]
    Eval(String),
}

impl ParseError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Non-empty lines of `input` with surrounding whitespace removed, numbered from 1.
pub fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

pub fn number<T>(line: usize, text: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.trim()
        .parse()
        .map_err(|source| ParseError::InvalidNumber {
            line,
            text: text.to_owned(),
            source,
        })
}

pub fn non_empty(input: &str) -> Result<&str, ParseError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Err(ParseError::Empty)
    } else {
        Ok(trimmed)
    }
}
