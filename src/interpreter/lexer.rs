use logos::{FilterResult, Logos};

use crate::error::ParseError;

/// The kind of a lexical token.
///
/// Keywords are matched case-insensitively; a word that is longer than a
/// keyword (such as `endx` or `programs`) stays an identifier because the
/// longest match wins.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Num,
    /// Identifier tokens; variable, program or subroutine names such as `x`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Id,
    /// `program`
    #[token("program", ignore(case))]
    Program,
    /// `integer`
    #[token("integer", ignore(case))]
    Integer,
    /// `subroutine`
    #[token("subroutine", ignore(case))]
    Subroutine,
    /// `endsubroutine`
    #[token("endsubroutine", ignore(case))]
    EndSubroutine,
    /// `end`
    #[token("end", ignore(case))]
    End,
    /// `output`
    #[token("output", ignore(case))]
    Output,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    ParenL,
    /// `)`
    #[token(")")]
    ParenR,
    /// `<-`
    #[token("<-")]
    Assign,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `# Comments.` Only allowed as the first character of a line.
    #[regex(r"#[^\n]*", line_comment, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, feeds and newlines.
    #[regex(r"[ \t\r\n\f]+", |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Whitespace,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Num => "NUM",
            Self::Id => "ID",
            Self::Program => "PROGRAM",
            Self::Integer => "INTEGER",
            Self::Subroutine => "SUBROUTINE",
            Self::EndSubroutine => "ENDSUBROUTINE",
            Self::End => "END",
            Self::Output => "OUTPUT",
            Self::Comma => "COMMA",
            Self::ParenL => "PAREN_L",
            Self::ParenR => "PAREN_R",
            Self::Assign => "ASSIGN",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Comment => "COMMENT",
            Self::Whitespace => "WHITESPACE",
        };
        write!(f, "{name}")
    }
}

/// Represents a lexical token in the source input.
///
/// A token pairs its [`TokenKind`] with the exact text it was matched from.
/// Keywords keep the case they were written in, so `Output` and `OUTPUT` are
/// both [`TokenKind::Output`] with different texts.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The matched lexeme.
    pub text: String,
}

impl Token {
    /// Creates a token from a kind and its lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Skips a `#` comment if it starts a line, and rejects it otherwise.
fn line_comment(lex: &logos::Lexer<TokenKind>) -> FilterResult<(), ()> {
    let start = lex.span().start;
    if start == 0 || lex.source().as_bytes()[start - 1] == b'\n' {
        FilterResult::Skip
    } else {
        FilterResult::Error(())
    }
}

/// A lazy stream of `(Token, line)` pairs over one source text.
///
/// The stream is finite and cannot be restarted. After the first lexical
/// error it yields that error and then ends.
///
/// # Example
/// ```
/// use intsub::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("Output x <- -3").map(|t| t.unwrap().0.kind)
///                                                        .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Output, TokenKind::Id, TokenKind::Assign, TokenKind::Minus, TokenKind::Num]);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }),
               finished: false, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(kind) = self.inner.next() else {
            self.finished = true;
            return None;
        };

        let line = self.inner.extras.line;
        let text = self.inner.slice().to_string();

        match kind {
            Ok(kind) => Some(Ok((Token { kind, text }, line))),
            Err(()) => {
                self.finished = true;
                Some(Err(ParseError::UnrecognizedInput { text, line }))
            },
        }
    }
}

/// Tokenizes a whole source text.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedInput`] for the first piece of input that
/// matches no token rule.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    Lexer::new(source).collect()
}
