use logos::Logos;

/// Errors raised while scanning a single token.
///
/// Scan errors never abort the scanner; they are attached to the produced
/// token so that the parser (and ultimately the user) sees every problem in
/// the statement at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A rune sequence that no token pattern recognizes.
    #[default]
    InvalidSequence,
    /// A digit run too large to fit a 64-bit signed integer.
    NumberTooLarge,
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSequence => write!(f, "invalid rune sequence"),
            Self::NumberTooLarge => write!(f, "number literal out of range"),
        }
    }
}

/// Raw token patterns recognized by the generated scanner.
///
/// This enum only exists to drive the `logos` derive; `scan` converts every
/// raw token into a [`Token`] carrying the public [`TokenKind`], its lexeme
/// and its position. Sentinel kinds that the scanner itself never produces
/// (end-of-line, error tokens) live on [`TokenKind`] only.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = ScanError)]
enum RawToken {
    /// Conjunction, `∧` or `^`.
    #[token("∧")]
    #[token("^")]
    And,
    /// Disjunction, `∨`; the ASCII `v` counts only when followed by
    /// whitespace, otherwise it joins an identifier-like run.
    #[token("∨")]
    #[regex(r"v[ \t\r\n]")]
    Or,
    /// Negation, `¬`, `!` or the word `not`.
    #[token("¬")]
    #[token("!")]
    #[token("not")]
    Not,
    /// Exclusive disjunction, `⊕` or `*`.
    #[token("⊕")]
    #[token("*")]
    Xor,
    /// Equivalence, `≡` or `=`.
    #[token("≡")]
    #[token("=")]
    Eq,
    /// Material implication, `→`.
    #[token("→")]
    Mi,
    /// `>=`
    #[token(">=")]
    Ge,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    Le,
    /// `<`
    #[token("<")]
    Lt,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// The binding keyword `is`.
    #[token("is")]
    Is,
    /// A binding continuation, `where` or `and`. The bare word `and` never
    /// means conjunction; conjunction is spelled `^` or `∧`.
    #[token("where")]
    #[token("and")]
    Where,
    /// The gate declaration keyword.
    #[token("gate")]
    Gate,
    /// Boolean literal tokens: `true`, `false`, `1`, `0`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    #[token("1", parse_bool, priority = 3)]
    #[token("0", parse_bool, priority = 3)]
    Bool(bool),
    /// Numeric literal tokens; any digit run other than a lone `0` or `1`.
    #[regex(r"[0-9]+", parse_number)]
    Num(i64),
    /// Identifier-like runs: maximal runs of runes that are not whitespace,
    /// not structural and not operators. Keywords win over this pattern at
    /// equal length.
    #[regex(r"[^ \t\r\n()\[\],∧\^∨¬!⊕*≡=→<>0-9][^ \t\r\n()\[\],∧\^∨¬!⊕*≡=→<>]*")]
    Identifier,
    /// Spaces and line breaks between tokens.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

/// The public classification of a token.
///
/// Covers every kind the scanner can produce plus the sentinels used further
/// down the pipeline: `Eol` is synthesized by the parser cursor when it reads
/// past the end of a statement, `Err` marks a scan error with a usable lexeme
/// (an oversized number), and `Invalid` marks input no pattern recognizes.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    And,
    Or,
    Not,
    Xor,
    Eq,
    Mi,
    Ge,
    Gt,
    Le,
    Lt,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    Is,
    Where,
    Gate,
    Bool(bool),
    Num(i64),
    Identifier,
    Eol,
    Err,
    Invalid,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::And => Self::And,
            RawToken::Or => Self::Or,
            RawToken::Not => Self::Not,
            RawToken::Xor => Self::Xor,
            RawToken::Eq => Self::Eq,
            RawToken::Mi => Self::Mi,
            RawToken::Ge => Self::Ge,
            RawToken::Gt => Self::Gt,
            RawToken::Le => Self::Le,
            RawToken::Lt => Self::Lt,
            RawToken::OpenParen => Self::OpenParen,
            RawToken::CloseParen => Self::CloseParen,
            RawToken::OpenBracket => Self::OpenBracket,
            RawToken::CloseBracket => Self::CloseBracket,
            RawToken::Comma => Self::Comma,
            RawToken::Is => Self::Is,
            RawToken::Where => Self::Where,
            RawToken::Gate => Self::Gate,
            RawToken::Bool(b) => Self::Bool(b),
            RawToken::Num(n) => Self::Num(n),
            RawToken::Identifier => Self::Identifier,
            RawToken::Ignored => unreachable!("whitespace is skipped by the scanner"),
        }
    }
}

/// A scanned token: its kind, the original characters, the byte offset into
/// the scanned statement and, for `Err`/`Invalid` tokens, the scan error.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's classification.
    pub kind:   TokenKind,
    /// The original characters, whitespace-trimmed.
    pub lexeme: String,
    /// Byte offset of the first rune in the scanned statement.
    pub pos:    usize,
    /// The scan error attached to `Err` and `Invalid` tokens.
    pub err:    Option<ScanError>,
}

impl Token {
    /// Builds the end-of-line sentinel the parser cursor hands out when it
    /// reads past the last real token.
    #[must_use]
    pub const fn eol(pos: usize) -> Self {
        Self { kind: TokenKind::Eol,
               lexeme: String::new(),
               pos,
               err: None }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(err) = &self.err {
            return write!(f, "ERROR({err}: `{}`)", self.lexeme);
        }

        match &self.kind {
            TokenKind::And => write!(f, "AND"),
            TokenKind::Or => write!(f, "OR"),
            TokenKind::Not => write!(f, "NOT"),
            TokenKind::Xor => write!(f, "XOR"),
            TokenKind::Eq => write!(f, "EQ"),
            TokenKind::Mi => write!(f, "MATERIAL-IMPLICATION"),
            TokenKind::Ge => write!(f, "GREATER-EQUAL"),
            TokenKind::Gt => write!(f, "GREATER"),
            TokenKind::Le => write!(f, "LESS-EQUAL"),
            TokenKind::Lt => write!(f, "LESS"),
            TokenKind::OpenParen => write!(f, "OPEN-PAREN"),
            TokenKind::CloseParen => write!(f, "CLOSE-PAREN"),
            TokenKind::OpenBracket => write!(f, "OPEN-BRACKET"),
            TokenKind::CloseBracket => write!(f, "CLOSE-BRACKET"),
            TokenKind::Comma => write!(f, "COMMA"),
            TokenKind::Is => write!(f, "BIND"),
            TokenKind::Where => write!(f, "WHERE"),
            TokenKind::Gate => write!(f, "GATE"),
            TokenKind::Bool(true) => write!(f, "TRUE"),
            TokenKind::Bool(false) => write!(f, "FALSE"),
            TokenKind::Num(n) => write!(f, "NUM({n})"),
            TokenKind::Identifier => write!(f, "ID({})", self.lexeme),
            TokenKind::Eol => write!(f, "EOL"),
            TokenKind::Err | TokenKind::Invalid => write!(f, "INVALID({})", self.lexeme),
        }
    }
}

/// Scans a statement into an ordered list of tokens.
///
/// Scanning is deterministic and never aborts: unrecognized input and
/// oversized number literals are emitted as `Invalid`/`Err` tokens carrying a
/// [`ScanError`], and scanning continues with the next rune.
///
/// # Examples
/// ```
/// use logica::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("p ^ true");
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier, TokenKind::And, TokenKind::Bool(true)]);
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(next) = lexer.next() {
        let pos = lexer.span().start;
        // The ASCII `v` disjunction consumes its deciding whitespace rune;
        // trimming keeps the stored lexeme at `v` alone.
        let lexeme = lexer.slice().trim_end().to_string();

        match next {
            Ok(raw) => tokens.push(Token { kind: raw.into(),
                                           lexeme,
                                           pos,
                                           err: None }),
            Err(err) => {
                let kind = match err {
                    ScanError::NumberTooLarge => TokenKind::Err,
                    ScanError::InvalidSequence => TokenKind::Invalid,
                };
                tokens.push(Token { kind,
                                    lexeme,
                                    pos,
                                    err: Some(err) });
            },
        }
    }

    tokens
}

/// Parses a boolean literal from the current token slice.
///
/// `true` and `1` are truth; `false` and `0` are falsity.
fn parse_bool(lex: &mut logos::Lexer<RawToken>) -> Option<bool> {
    match lex.slice() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The pattern admits only digit runs, so the sole failure mode is a value
/// outside the `i64` range.
fn parse_number(lex: &mut logos::Lexer<RawToken>) -> Result<i64, ScanError> {
    lex.slice().parse().map_err(|_| ScanError::NumberTooLarge)
}
