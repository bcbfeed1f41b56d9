use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Whitespace and `//` line comments are skipped; newlines are skipped too
/// (they are insignificant in the grammar) while advancing the line counter
/// used for error reporting.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.5`.
    ///
    /// The grammar's optional leading sign is not part of the token; the
    /// parser folds a preceding `+`/`-` into the literal at factor level so
    /// that `1-2` still lexes as a subtraction.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello"` or `'hi'`.
    ///
    /// Either quote character may be used; the content runs to the next
    /// matching quote with no escape processing and may not span lines.
    #[regex(r#""[^"\n]*""#, parse_string)]
    #[regex(r"'[^'\n]*'", parse_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// `\` — begins a function definition.
    #[token("\\")]
    Backslash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=` — assignment at statement level, not-equal inside expressions.
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// Newlines are plain whitespace in this grammar; only the line counter
    /// advances.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal token slice.
///
/// The language has no escape sequences, so the content between the quotes is
/// taken verbatim.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a full source string into `(Token, line)` pairs.
///
/// Whitespace and comments are skipped during lexing and never appear in the
/// output. Each token is paired with the line number it starts on.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the input contains a character
/// sequence that matches no token rule (for example an unterminated string
/// literal or a stray `.`).
///
/// # Example
/// ```
/// use scrawl::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x != 1 // bind x").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 1),
///                 (Token::BangEqual, 1),
///                 (Token::Number(1.0), 1)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
