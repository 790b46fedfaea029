use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// Represents a lexical token in a formula program.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens: any run of digits and dots, such as `10`,
    /// `3.25` or `.5`.
    ///
    /// The text is not validated here; `1.2.3` is one token.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens: a letter followed by letters or digits, such as
    /// `CLOSE` or `V1`.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `,`
    #[token(",")]
    Comma,
    /// `<`, `>`, `=`, `!`, `<=`, `>=`, `==` or `!=`.
    ///
    /// Recognized so that comparisons lex cleanly, but no grammar rule
    /// accepts them yet.
    #[regex(r"[<>=!]=?", |lex| lex.slice().to_string())]
    Comparison(String),
    /// `:=` or `:`, kept as written.
    #[token(":=", |lex| lex.slice().to_string())]
    #[token(":", |lex| lex.slice().to_string())]
    Assign(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, vertical tabs and feeds.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text)
            | Self::Identifier(text)
            | Self::Comparison(text)
            | Self::Assign(text) => {
                write!(f, "'{text}'")
            },
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Comma => write!(f, "','"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Semicolon => write!(f, "';'"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Splits formula text into tokens paired with their source line.
///
/// Whitespace is skipped. The first character that starts no token aborts
/// tokenization.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] naming the offending character.
///
/// # Example
/// ```
/// use formulang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("V1:=CLOSE*2;").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("V1".to_string()),
///                 Token::Assign(":=".to_string()),
///                 Token::Identifier("CLOSE".to_string()),
///                 Token::Star,
///                 Token::Number("2".to_string()),
///                 Token::Semicolon]);
///
/// assert!(tokenize("V1:=CLOSE#2;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character,
                                                      line: lexer.extras.line });
        }
    }

    trace!(count = tokens.len(), "tokenized formula");
    Ok(tokens)
}
