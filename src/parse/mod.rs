//! Coordinate list parsing
//!
//! Splits a LaTeX-style coordinate list such as
//! `$\left(1,2\right),\left(3,4\right)$` into its coordinate tokens and
//! extracts the numeric x/y values from each one.
//!
//! The input is split on the literal [`TOKEN_DELIMITER`]. Only the first and
//! last tokens carry surrounding markup: the first token is cut to everything
//! after its last `(`, the last token to everything before its first `\`.
//!
//! # Example
//!
//! ```
//! use coordavg::parse::parse_document;
//!
//! let doc = parse_document(r"\left(1,2\right),\left(3,4\right)").unwrap();
//! assert_eq!(doc.tokens, vec!["1,2", "3,4"]);
//! assert_eq!(doc.coordinates[1].x, 3.0);
//! ```

use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

/// Separator between two coordinate tokens
pub const TOKEN_DELIMITER: &str = r"\right),\left(";

/// Character ending the prefix of the first token
pub const PREFIX_END: char = '(';

/// Character starting the suffix of the last token
pub const SUFFIX_START: char = '\\';

/// Separator between the x and y components of a token
pub const COMPONENT_SEPARATOR: char = ',';

/// Which end of the coordinate list a boundary check applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPosition {
    First,
    Last,
}

impl fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPosition::First => write!(f, "first"),
            TokenPosition::Last => write!(f, "last"),
        }
    }
}

/// Coordinate component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    X,
    Y,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::X => write!(f, "x"),
            Component::Y => write!(f, "y"),
        }
    }
}

/// Errors raised while parsing a coordinate list
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected '{delimiter}' in the {position} token, found none")]
    DelimiterNotFound {
        delimiter: char,
        position: TokenPosition,
    },

    #[error("token {index} ({token:?}) must contain exactly one ',', found {commas}")]
    MalformedToken {
        index: usize,
        token: String,
        commas: usize,
    },

    #[error("token {index}: invalid {component} value {value:?}")]
    InvalidNumber {
        index: usize,
        component: Component,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("input contains no coordinate tokens")]
    EmptyInput,
}

/// A single parsed (x, y) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse a stripped token such as `1.5,-2`
    ///
    /// The token must hold exactly one comma. Whitespace around each number is
    /// ignored for the numeric parse only; the token text itself is not changed.
    pub fn from_token(index: usize, token: &str) -> Result<Self, ParseError> {
        let commas = token.matches(COMPONENT_SEPARATOR).count();
        if commas != 1 {
            return Err(ParseError::MalformedToken {
                index,
                token: token.to_string(),
                commas,
            });
        }

        // Exactly one separator, so split_once always succeeds here
        let (x, y) = token
            .split_once(COMPONENT_SEPARATOR)
            .ok_or_else(|| ParseError::MalformedToken {
                index,
                token: token.to_string(),
                commas,
            })?;

        Ok(Self {
            x: parse_component(index, Component::X, x)?,
            y: parse_component(index, Component::Y, y)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

fn parse_component(index: usize, component: Component, raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            index,
            component,
            value: raw.to_string(),
            source,
        })
}

/// Tokens and their parsed values, index-aligned
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Stripped token text, as it will be re-emitted
    pub tokens: Vec<String>,
    /// Parsed value of each token
    pub coordinates: Vec<Coordinate>,
}

impl ParsedDocument {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split raw text into stripped coordinate tokens
///
/// With a single token both the prefix and the suffix strip apply to it.
pub fn split_tokens(text: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens: Vec<String> = text.split(TOKEN_DELIMITER).map(str::to_string).collect();

    let first = tokens.first_mut().ok_or(ParseError::EmptyInput)?;
    let start = first
        .rfind(PREFIX_END)
        .ok_or(ParseError::DelimiterNotFound {
            delimiter: PREFIX_END,
            position: TokenPosition::First,
        })?;
    *first = first[start + PREFIX_END.len_utf8()..].to_string();

    let last = tokens.last_mut().ok_or(ParseError::EmptyInput)?;
    let end = last
        .find(SUFFIX_START)
        .ok_or(ParseError::DelimiterNotFound {
            delimiter: SUFFIX_START,
            position: TokenPosition::Last,
        })?;
    last.truncate(end);

    Ok(tokens)
}

/// Split and parse a whole coordinate list
pub fn parse_document(text: &str) -> Result<ParsedDocument, ParseError> {
    let tokens = split_tokens(text)?;
    let coordinates = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| Coordinate::from_token(i, token))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Parsed {} coordinate tokens", tokens.len());

    Ok(ParsedDocument {
        tokens,
        coordinates,
    })
}
