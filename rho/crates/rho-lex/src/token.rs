//! Token definitions for the Rho lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] of source text it
//! covers and, for literals, the decoded [`TokenValue`]. Every character of
//! the source belongs to exactly one token: whitespace, newlines and comments
//! are tokens too, so consumers can rebuild the input from the token stream.
//!
//! The reserved-word and operator tables are derived from [`TokenKind`]
//! itself and built once per process.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use rho_util::Span;

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    // ===== Identifiers and keywords =====
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword
    Ident,
    /// `fun`
    Fun,
    /// `class`
    Class,
    /// `assert`
    Assert,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `in`
    In,
    /// `while`
    While,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `yield`
    Yield,
    /// `new`
    New,
    /// `self`
    SelfKw,
    /// `true`
    True,
    /// `false`
    False,

    // ===== Literals =====
    /// Integer literal: `42`
    Int,
    /// Floating-point literal: `3.14`
    Float,
    /// String literal: `"text"`
    String,
    /// Character literal: `'c'`
    Char,

    // ===== Operators =====
    /// `=`
    Assign,
    /// `==`
    Equiv,
    /// `!=`
    NotEquiv,
    /// `<`
    Less,
    /// `<=`
    LessEquiv,
    /// `>`
    Greater,
    /// `>=`
    GreaterEquiv,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `^`
    Xor,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `->`
    Arrow,

    // ===== Punctuation =====
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenSquare,
    /// `]`
    CloseSquare,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `:`
    Colon,
    /// `.`
    Dot,

    // ===== Trivia =====
    /// A run of whitespace other than newline; a no-op for parsers
    Whitespace,
    /// A single `\n`
    NewLine,
    /// `// ...` up to the end of the line
    Comment,

    // ===== Special =====
    /// Embedded Pi code: `{ ... }`, carried through unparsed
    PiSlice,
    /// End of input marker, always zero-length and last
    Eof,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Ident,
        TokenKind::Fun,
        TokenKind::Class,
        TokenKind::Assert,
        TokenKind::Return,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::In,
        TokenKind::While,
        TokenKind::Break,
        TokenKind::Continue,
        TokenKind::Yield,
        TokenKind::New,
        TokenKind::SelfKw,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::Assign,
        TokenKind::Equiv,
        TokenKind::NotEquiv,
        TokenKind::Less,
        TokenKind::LessEquiv,
        TokenKind::Greater,
        TokenKind::GreaterEquiv,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mul,
        TokenKind::Divide,
        TokenKind::Modulo,
        TokenKind::Not,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::PlusAssign,
        TokenKind::MinusAssign,
        TokenKind::MulAssign,
        TokenKind::DivAssign,
        TokenKind::Arrow,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenSquare,
        TokenKind::CloseSquare,
        TokenKind::Comma,
        TokenKind::Semi,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Whitespace,
        TokenKind::NewLine,
        TokenKind::Comment,
        TokenKind::PiSlice,
        TokenKind::Eof,
    ];

    /// The reserved word spelling this keyword, if it is one.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Fun => "fun",
            TokenKind::Class => "class",
            TokenKind::Assert => "assert",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::While => "while",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Yield => "yield",
            TokenKind::New => "new",
            TokenKind::SelfKw => "self",
            TokenKind::True => "true",
            TokenKind::False => "false",
            _ => return None,
        };
        Some(text)
    }

    /// The fixed spelling of an operator or punctuation token.
    pub fn symbol(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Assign => "=",
            TokenKind::Equiv => "==",
            TokenKind::NotEquiv => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquiv => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquiv => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mul => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulo => "%",
            TokenKind::Not => "!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Xor => "^",
            TokenKind::PlusAssign => "+=",
            TokenKind::MinusAssign => "-=",
            TokenKind::MulAssign => "*=",
            TokenKind::DivAssign => "/=",
            TokenKind::Arrow => "->",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenSquare => "[",
            TokenKind::CloseSquare => "]",
            TokenKind::Comma => ",",
            TokenKind::Semi => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            _ => return None,
        };
        Some(text)
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }

    /// Returns true for tokens that carry a [`TokenValue`].
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Char
        )
    }

    /// Returns true for operators (not punctuation).
    pub fn is_operator(self) -> bool {
        self.symbol().is_some() && !self.is_punctuation()
    }

    /// Returns true for grouping and separator punctuation.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen
                | TokenKind::CloseParen
                | TokenKind::OpenSquare
                | TokenKind::CloseSquare
                | TokenKind::Comma
                | TokenKind::Semi
                | TokenKind::Colon
                | TokenKind::Dot
        )
    }

    /// Returns true for whitespace, newlines and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::NewLine | TokenKind::Comment
        )
    }

    /// The variant name, as used in themes and JSON dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "Ident",
            TokenKind::Fun => "Fun",
            TokenKind::Class => "Class",
            TokenKind::Assert => "Assert",
            TokenKind::Return => "Return",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::For => "For",
            TokenKind::In => "In",
            TokenKind::While => "While",
            TokenKind::Break => "Break",
            TokenKind::Continue => "Continue",
            TokenKind::Yield => "Yield",
            TokenKind::New => "New",
            TokenKind::SelfKw => "SelfKw",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::Char => "Char",
            TokenKind::Assign => "Assign",
            TokenKind::Equiv => "Equiv",
            TokenKind::NotEquiv => "NotEquiv",
            TokenKind::Less => "Less",
            TokenKind::LessEquiv => "LessEquiv",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEquiv => "GreaterEquiv",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Mul => "Mul",
            TokenKind::Divide => "Divide",
            TokenKind::Modulo => "Modulo",
            TokenKind::Not => "Not",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Xor => "Xor",
            TokenKind::PlusAssign => "PlusAssign",
            TokenKind::MinusAssign => "MinusAssign",
            TokenKind::MulAssign => "MulAssign",
            TokenKind::DivAssign => "DivAssign",
            TokenKind::Arrow => "Arrow",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::OpenSquare => "OpenSquare",
            TokenKind::CloseSquare => "CloseSquare",
            TokenKind::Comma => "Comma",
            TokenKind::Semi => "Semi",
            TokenKind::Colon => "Colon",
            TokenKind::Dot => "Dot",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::NewLine => "NewLine",
            TokenKind::Comment => "Comment",
            TokenKind::PiSlice => "PiSlice",
            TokenKind::Eof => "Eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown token kind name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTokenKind(pub String);

impl fmt::Display for UnknownTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownTokenKind {}

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

lazy_static! {
    /// Reserved words, keyed by their exact spelling.
    static ref KEYWORDS: FxHashMap<&'static str, TokenKind> = TokenKind::ALL
        .iter()
        .filter_map(|&kind| kind.keyword_text().map(|text| (text, kind)))
        .collect();

    /// Operators and punctuation, longest spelling first.
    static ref OPERATORS: Vec<(&'static str, TokenKind)> = {
        let mut table: Vec<_> = TokenKind::ALL
            .iter()
            .filter_map(|&kind| kind.symbol().map(|text| (text, kind)))
            .collect();
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        table
    };
}

/// Looks up a reserved word. Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use rho_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("Class"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Returns the longest operator or punctuation spelling that prefixes
/// `text`.
///
/// # Example
///
/// ```
/// use rho_lex::{longest_operator, TokenKind};
///
/// assert_eq!(longest_operator("<= 1"), Some(("<=", TokenKind::LessEquiv)));
/// assert_eq!(longest_operator("< 1"), Some(("<", TokenKind::Less)));
/// assert_eq!(longest_operator("@"), None);
/// ```
pub fn longest_operator(text: &str) -> Option<(&'static str, TokenKind)> {
    OPERATORS
        .iter()
        .find(|(symbol, _)| text.starts_with(symbol))
        .copied()
}

/// Decoded value of a literal token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TokenValue {
    /// Integer literal value
    Int(i64),
    /// Floating-point literal value
    Float(f64),
    /// Unescaped string literal content
    Str(String),
    /// Unescaped character literal
    Char(char),
}

/// A classified, positioned unit of source text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Source range, delimiters included.
    pub span: Span,
    /// Decoded value; present for literal tokens only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
}

impl Token {
    /// Creates a token without a value.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            value: None,
        }
    }

    /// Creates a literal token.
    pub fn literal(kind: TokenKind, span: Span, value: TokenValue) -> Self {
        Self {
            kind,
            span,
            value: Some(value),
        }
    }

    /// Returns the source text this token covers.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }

    /// Returns the span without the delimiters of quoted and braced tokens.
    ///
    /// For every other kind this is the token's span unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use rho_lex::tokenize;
    ///
    /// let source = "\"hi\"";
    /// let tokens = tokenize(source).unwrap();
    /// assert_eq!(tokens[0].text(source), "\"hi\"");
    /// assert_eq!(tokens[0].inner_span().slice(source), "hi");
    /// ```
    pub fn inner_span(&self) -> Span {
        match self.kind {
            TokenKind::String | TokenKind::Char | TokenKind::PiSlice => {
                self.span.shrink_delimiters()
            },
            _ => self.span,
        }
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.span)?;
        match &self.value {
            Some(TokenValue::Int(v)) => write!(f, " = {}", v),
            Some(TokenValue::Float(v)) => write!(f, " = {:?}", v),
            Some(TokenValue::Str(v)) => write!(f, " = {:?}", v),
            Some(TokenValue::Char(v)) => write!(f, " = {:?}", v),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_complete_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in TokenKind::ALL {
            assert!(seen.insert(kind.name()), "duplicate kind {}", kind);
        }
        assert_eq!(TokenKind::ALL.last(), Some(&TokenKind::Eof));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for &kind in TokenKind::ALL {
            assert_eq!(kind.name().parse::<TokenKind>(), Ok(kind));
        }
        assert!("Nope".parse::<TokenKind>().is_err());
    }

    #[test]
    fn test_keyword_table() {
        assert_eq!(keyword_from_ident("fun"), Some(TokenKind::Fun));
        assert_eq!(keyword_from_ident("assert"), Some(TokenKind::Assert));
        assert_eq!(keyword_from_ident("self"), Some(TokenKind::SelfKw));
        assert_eq!(keyword_from_ident("class1"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_operator_table_prefers_longest() {
        assert_eq!(longest_operator("=="), Some(("==", TokenKind::Equiv)));
        assert_eq!(longest_operator("=1"), Some(("=", TokenKind::Assign)));
        assert_eq!(longest_operator("->x"), Some(("->", TokenKind::Arrow)));
        assert_eq!(longest_operator("&"), None);
        assert_eq!(longest_operator(""), None);
    }

    #[test]
    fn test_classification() {
        assert!(TokenKind::Class.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(TokenKind::Float.is_literal());
        assert!(TokenKind::LessEquiv.is_operator());
        assert!(!TokenKind::Comma.is_operator());
        assert!(TokenKind::Comma.is_punctuation());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::PiSlice.is_trivia());
    }

    #[test]
    fn test_inner_span_of_plain_token_is_unchanged() {
        let token = Token::new(TokenKind::Ident, Span::new(0, 3, 1, 1));
        assert_eq!(token.inner_span(), token.span);
    }

    #[test]
    fn test_display() {
        let token = Token::literal(
            TokenKind::Int,
            Span::new(0, 2, 1, 1),
            TokenValue::Int(42),
        );
        assert_eq!(token.to_string(), "Int 1:1 [0..2) = 42");
    }
}
