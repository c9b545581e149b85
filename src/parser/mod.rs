//! Program text parser
//!
//! This module turns program text into a [`crate::store::Store`]:
//! - [`lexer`]: per-line tokenization (marker character, then words, numbers
//!   and parentheses)
//! - [`parse`]: the line parser, name resolution against the universe and
//!   declaration ordering rules
//!
//! # Parser Implementation
//!
//! Hand-written; every line is lexed up front, then parsed top to bottom in a
//! single pass. No external parser generator dependencies.

pub mod lexer;
pub mod parse;
