pub const HANDLE: &str = "M3THY1";
pub const BADGE: &str = "Security Researcher";
pub const TAGLINE: &str = "Binary exploitation, reverse engineering and AI-augmented vulnerability research.";
pub const MOTTO: &str = "Si Vis Pacem, Para Bellum";
pub const GITHUB_URL: &str = "https://github.com/M3thy1";
pub const TELEGRAM_URL: &str = "https://t.me/m3thy1";

/// Syntax-highlight role of a code card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Type,
    Function,
    Plain,
    Literal,
}

#[derive(Debug, Clone, Copy)]
pub struct CodeToken {
    pub text: &'static str,
    pub kind: TokenKind,
}

const fn token(text: &'static str, kind: TokenKind) -> CodeToken {
    CodeToken { text, kind }
}

/// The profile card, one slice per line.
pub const CODE_CARD: &[&[CodeToken]] = &[
    &[
        token("class", TokenKind::Keyword),
        token(" CybersecurityResearcher", TokenKind::Type),
        token(":", TokenKind::Plain),
    ],
    &[
        token("    def", TokenKind::Keyword),
        token(" __init__", TokenKind::Function),
        token("(self):", TokenKind::Plain),
    ],
    &[
        token("        self.handle", TokenKind::Plain),
        token(" = ", TokenKind::Keyword),
        token("\"M3thy1\"", TokenKind::Literal),
    ],
    &[
        token("        self.focus", TokenKind::Plain),
        token(" = [", TokenKind::Plain),
        token("\"binary_exploitation\"", TokenKind::Literal),
        token(",", TokenKind::Plain),
    ],
    &[
        token("                      ", TokenKind::Plain),
        token("\"reverse_engineering\"", TokenKind::Literal),
        token(",", TokenKind::Plain),
    ],
    &[
        token("                      ", TokenKind::Plain),
        token("\"vulnerability_research\"", TokenKind::Literal),
        token("]", TokenKind::Plain),
    ],
    &[
        token("        self.mission", TokenKind::Plain),
        token(" = ", TokenKind::Keyword),
        token("\"Secure the digital frontier\"", TokenKind::Literal),
    ],
];
