//! Error handling for the Quartz compiler

use crate::utils::Span;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Compiler error
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ==================== Parser Errors ====================

    #[error("unexpected token: expected {expected}, got {got}")]
    UnexpectedToken {
        expected: String,
        got: String,
        span: Span,
    },

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char, Span),

    #[error("unterminated substituted constant, expected '%]'")]
    UnterminatedSubstConst { span: Span },

    #[error("invalid integer literal '{text}'")]
    InvalidIntLiteral { text: String, span: Span },

    // ==================== Type Errors ====================

    #[error("unexpected unresolved identifier '{name}'")]
    UnresolvedIdentifier { name: String, span: Span },

    #[error("operator '{op}' is not implemented for types '{lhs}' and '{rhs}'")]
    OperatorNotImplemented {
        op: char,
        lhs: String,
        rhs: String,
        span: Span,
    },

    #[error("unary '-' is not supported for type '{ty}'")]
    NegNotSupported { ty: String, span: Span },

    #[error("cannot dereference type '{ty}'")]
    CannotDereference { ty: String, span: Span },

    #[error("expression has no address")]
    NoAddress { span: Span },

    #[error("cannot cast '{src}' to '{dest}'")]
    CannotCast {
        src: String,
        dest: String,
        span: Span,
    },

    #[error("cannot cast to '{dest}' since the expression has no address")]
    CastNoAddress { dest: String, span: Span },

    #[error("cannot apply dot-operator to non-struct type '{ty}'")]
    DotNonStruct { ty: String, span: Span },

    #[error("cannot apply dot-operator to pointer-to-non-struct type '{ty}'")]
    DotPointerNonStruct { ty: String, span: Span },

    #[error("member {member} does not appear in definition of struct '{strct}'")]
    UnknownMember {
        member: String,
        strct: String,
        span: Span,
    },

    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String, span: Span },

    #[error("duplicate definition: {name}")]
    DuplicateDefinition { name: String, span: Span },

    // ==================== Internal Invariant Violations ====================
    // These signal a defect in an upstream pass, not bad user input.

    #[error("identifiers must be initialized for type-simplification of dot-operator expressions")]
    SymbolsNotLoaded { span: Span },

    #[error("type is expected to be fully resolved at this point")]
    UnresolvedType { span: Span },
}

impl Error {
    /// Get the span associated with this error
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::UnexpectedChar(_, span) => *span,
            Self::UnterminatedSubstConst { span } => *span,
            Self::InvalidIntLiteral { span, .. } => *span,
            Self::UnresolvedIdentifier { span, .. } => *span,
            Self::OperatorNotImplemented { span, .. } => *span,
            Self::NegNotSupported { span, .. } => *span,
            Self::CannotDereference { span, .. } => *span,
            Self::NoAddress { span } => *span,
            Self::CannotCast { span, .. } => *span,
            Self::CastNoAddress { span, .. } => *span,
            Self::DotNonStruct { span, .. } => *span,
            Self::DotPointerNonStruct { span, .. } => *span,
            Self::UnknownMember { span, .. } => *span,
            Self::UnknownIdentifier { span, .. } => *span,
            Self::DuplicateDefinition { span, .. } => *span,
            Self::SymbolsNotLoaded { span } => *span,
            Self::UnresolvedType { span } => *span,
        }
    }

    /// Whether this error indicates a bug in an upstream pass rather than
    /// a problem with the user's program.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::SymbolsNotLoaded { .. } | Self::UnresolvedType { .. }
        )
    }
}
