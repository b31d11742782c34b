//! Token definitions for the Quartz expression grammar

use crate::utils::Span;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token kinds
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ============ Keywords ============
    /// cast
    Cast,
    /// felt
    Felt,
    /// fp (frame pointer register)
    Fp,
    /// ap (allocation pointer register)
    Ap,

    // ============ Identifiers and Literals ============
    /// Identifier (one segment of a possibly dotted name)
    Ident(String),
    /// Integer literal
    Int(i128),
    /// Substituted build-time constant (`%[ ... %]`)
    SubstConst(String),

    // ============ Operators ============
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// .
    Dot,
    /// & (address-of)
    Amp,
    /// = (named tuple member)
    Eq,

    // ============ Delimiters ============
    /// (
    LParen,
    /// )
    RParen,
    /// [
    LBracket,
    /// ]
    RBracket,
    /// ,
    Comma,

    // ============ Special ============
    /// End of input
    Eof,
}

impl TokenKind {
    /// Try to convert an identifier to a keyword
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "cast" => Some(TokenKind::Cast),
            "felt" => Some(TokenKind::Felt),
            "fp" => Some(TokenKind::Fp),
            "ap" => Some(TokenKind::Ap),
            _ => None,
        }
    }

    /// A short human-readable description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Cast => "'cast'".to_string(),
            TokenKind::Felt => "'felt'".to_string(),
            TokenKind::Fp => "'fp'".to_string(),
            TokenKind::Ap => "'ap'".to_string(),
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Int(value) => format!("integer '{}'", value),
            TokenKind::SubstConst(_) => "substituted constant".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Amp => "'&'".to_string(),
            TokenKind::Eq => "'='".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::LBracket => "'['".to_string(),
            TokenKind::RBracket => "']'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}
