//! Lexer (tokenizer) for program lines
//!
//! Each input line is a one-character [`Marker`] followed by either nothing
//! or a single space and a flat [`Token`] stream. The lexer only knows about
//! characters; whether a word is a valid element or command is decided by the
//! parser.

use crate::interpreter::constants::MAX_NAME_LENGTH;
use std::fmt;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Kind of declaration a line holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Universe,
    Set,
    Relation,
    Command,
}

impl Marker {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'U' => Some(Marker::Universe),
            'S' => Some(Marker::Set),
            'R' => Some(Marker::Relation),
            'C' => Some(Marker::Command),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Universe => write!(f, "U"),
            Marker::Set => write!(f, "S"),
            Marker::Relation => write!(f, "R"),
            Marker::Command => write!(f, "C"),
        }
    }
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String, SourceLocation),
    Number(u32, SourceLocation),
    LParen(SourceLocation),
    RParen(SourceLocation),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(s, _) => write!(f, "word '{}'", s),
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {}, column {}: {message}", .location.line, .location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

/// One tokenized program line
#[derive(Debug, Clone, PartialEq)]
pub struct LexedLine {
    pub marker: Marker,
    pub tokens: Vec<Token>,
    pub line: usize,
}

/// Lexer for a single program line
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a lexer for `input`, which is 1-based line `line` of the program.
    pub fn new(input: &str, line: usize) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line,
        }
    }

    /// Split off the marker and tokenize the rest of the line
    pub fn tokenize(&mut self) -> Result<LexedLine, LexError> {
        let marker = self.marker()?;
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            tokens.push(self.next_token()?);
        }

        Ok(LexedLine {
            marker,
            tokens,
            line: self.line,
        })
    }

    fn marker(&mut self) -> Result<Marker, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Empty line".to_string(),
            location: loc,
        })?;

        let marker = Marker::from_char(ch).ok_or_else(|| LexError {
            message: format!("Unknown line marker: '{}'", ch),
            location: loc,
        })?;

        match self.peek() {
            None => {}
            Some(' ') => {
                self.advance();
            }
            Some(other) => {
                return Err(LexError {
                    message: format!("Expected a space after '{}', found '{}'", marker, other),
                    location: self.current_location(),
                });
            }
        }

        Ok(marker)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of line".to_string(),
            location: loc,
        })?;

        match ch {
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '0'..='9' => self.number(ch, loc),
            'a'..='z' | 'A'..='Z' | '_' => self.word(ch, loc),
            _ => Err(LexError {
                message: format!("Illegal character: '{}'", ch.escape_debug()),
                location: loc,
            }),
        }
    }

    fn number(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if matches!(self.peek(), Some(ch) if ch.is_ascii_alphabetic() || ch == '_') {
            return Err(LexError {
                message: format!("Invalid number: {}{}", digits, self.peek().unwrap_or_default()),
                location: loc,
            });
        }

        let value = digits.parse::<u32>().map_err(|_| LexError {
            message: format!("Number too large: {}", digits),
            location: loc,
        })?;

        Ok(Token::Number(value, loc))
    }

    fn word(&mut self, first_char: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut word = String::new();
        word.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if word.len() > MAX_NAME_LENGTH {
            return Err(LexError {
                message: format!(
                    "Name '{}' is longer than {} characters",
                    word, MAX_NAME_LENGTH
                ),
                location: loc,
            });
        }

        Ok(Token::Word(word, loc))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Columns are 1-based
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.position + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Result<LexedLine, LexError> {
        Lexer::new(input, 1).tokenize()
    }

    #[test]
    fn test_universe_line() {
        let lexed = lex("U apple pear").unwrap();

        assert_eq!(lexed.marker, Marker::Universe);
        assert!(matches!(lexed.tokens[0], Token::Word(ref s, _) if s == "apple"));
        assert!(matches!(lexed.tokens[1], Token::Word(ref s, loc) if s == "pear" && loc.column == 9));
        assert_eq!(lexed.tokens.len(), 2);
    }

    #[test]
    fn test_bare_marker() {
        let lexed = lex("S").unwrap();
        assert_eq!(lexed.marker, Marker::Set);
        assert!(lexed.tokens.is_empty());
    }

    #[test]
    fn test_relation_tokens() {
        let lexed = lex("R (a b) (b c)").unwrap();

        assert_eq!(lexed.marker, Marker::Relation);
        assert!(matches!(lexed.tokens[0], Token::LParen(_)));
        assert!(matches!(lexed.tokens[1], Token::Word(ref s, _) if s == "a"));
        assert!(matches!(lexed.tokens[2], Token::Word(ref s, _) if s == "b"));
        assert!(matches!(lexed.tokens[3], Token::RParen(_)));
        assert_eq!(lexed.tokens.len(), 8);
    }

    #[test]
    fn test_command_tokens() {
        let lexed = lex("C closure_trans 12 3").unwrap();

        assert_eq!(lexed.marker, Marker::Command);
        assert!(matches!(lexed.tokens[0], Token::Word(ref s, _) if s == "closure_trans"));
        assert!(matches!(lexed.tokens[1], Token::Number(12, _)));
        assert!(matches!(lexed.tokens[2], Token::Number(3, _)));
    }

    #[test]
    fn test_unknown_marker() {
        let err = lex("X a b").unwrap_err();
        assert!(err.message.contains("Unknown line marker"));
    }

    #[test]
    fn test_missing_space_after_marker() {
        let err = lex("Sa").unwrap_err();
        assert_eq!(err.location.column, 2);
    }

    #[test]
    fn test_illegal_character() {
        let err = lex("U a, b").unwrap_err();
        assert!(err.message.contains("Illegal character"));
        assert_eq!(err.location, SourceLocation::new(1, 4));
    }

    #[test]
    fn test_name_too_long() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(lex(&format!("U {}", long)).is_err());
        assert!(lex(&format!("U {}", &long[1..])).is_ok());
    }

    #[test]
    fn test_bad_numbers() {
        assert!(lex("C empty 2x").is_err());
        assert!(lex("C empty 99999999999").is_err());
    }
}
