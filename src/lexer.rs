//! JSON tokenizer.
//!
//! A single left-to-right scan that turns source text into an ordered
//! token sequence with 1-based line/column positions. The tokenizer only
//! finds token boundaries: string payloads keep their escape sequences
//! for the codec, and number payloads keep their raw text for native
//! parsing in the parser.

use crate::error::{ParseError, ParseErrorKind};

/// The kind of a lexical token, with the raw source slice for literal
/// value tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'src> {
    /// `[`
    LeftBracket,
    /// `{`
    LeftBrace,
    /// `]`
    RightBracket,
    /// `}`
    RightBrace,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// A string literal: the raw, still-escaped text between the quotes.
    Str(&'src str),
    /// A number literal: the raw token text.
    Number(&'src str),
}

/// One lexical token and where it starts in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the token is.
    pub kind: TokenKind<'src>,
    /// 1-based source line.
    pub line: u32,
    /// 1-based character column.
    pub column: u32,
}

/// Whitespace per the JSON grammar.
fn is_whitespace(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | ' ')
}

/// Whitespace or a structural character. End of input also delimits,
/// checked inline where it matters.
fn is_token_delimiter(ch: char) -> bool {
    is_whitespace(ch) || matches!(ch, '[' | '{' | ']' | '}' | ':' | ',')
}

fn is_number_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | '-' | '+' | '.' | 'e' | 'E')
}

/// The scanning cursor over source text.
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Start scanning at line 1, column 1.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consume one ASCII character.
    fn bump(&mut self) {
        self.pos += 1;
        self.column += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                '\n' => {
                    self.pos += 1;
                    self.line += 1;
                    self.column = 1;
                }
                '\t' | '\r' | ' ' => self.bump(),
                _ => break,
            }
        }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, ParseError> {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let Some(ch) = self.peek() else {
            return Ok(None);
        };

        let kind = match ch {
            '[' => {
                self.bump();
                TokenKind::LeftBracket
            }
            '{' => {
                self.bump();
                TokenKind::LeftBrace
            }
            ']' => {
                self.bump();
                TokenKind::RightBracket
            }
            '}' => {
                self.bump();
                TokenKind::RightBrace
            }
            ':' => {
                self.bump();
                TokenKind::Colon
            }
            ',' => {
                self.bump();
                TokenKind::Comma
            }
            't' => self.literal_name("true", TokenKind::True, line, column)?,
            'f' => self.literal_name("false", TokenKind::False, line, column)?,
            'n' => self.literal_name("null", TokenKind::Null, line, column)?,
            '"' => self.string_literal(line, column)?,
            '0'..='9' | '-' | '.' => self.number_literal(),
            _ => {
                log::debug!("unknown token at ({line}, {column})");
                return Err(ParseError::at(ParseErrorKind::UnknownToken, line, column));
            }
        };

        Ok(Some(Token { kind, line, column }))
    }

    /// Match a literal name exactly, requiring a delimiter (or end of
    /// input) right after it so `trueX` is rejected rather than read as
    /// a prefix. Running out of input mid-name is an unknown token.
    fn literal_name(
        &mut self,
        name: &str,
        kind: TokenKind<'src>,
        line: u32,
        column: u32,
    ) -> Result<TokenKind<'src>, ParseError> {
        let rest = &self.source[self.pos..];
        if rest.len() < name.len() || !rest.starts_with(name) {
            return Err(ParseError::at(ParseErrorKind::UnknownToken, line, column));
        }
        if let Some(next) = rest[name.len()..].chars().next() {
            if !is_token_delimiter(next) {
                return Err(ParseError::at(ParseErrorKind::UnknownToken, line, column));
            }
        }
        self.pos += name.len();
        self.column += name.len() as u32;
        Ok(kind)
    }

    /// Scan to the matching unescaped closing quote. A `\` always
    /// consumes the character after it, even another `"`. Escape
    /// legality is the codec's problem, not ours.
    fn string_literal(&mut self, line: u32, column: u32) -> Result<TokenKind<'src>, ParseError> {
        let start = self.pos + 1; // past the opening quote
        let mut chars = self.source[start..].char_indices();
        let mut consumed: u32 = 2; // both quotes

        loop {
            let Some((offset, ch)) = chars.next() else {
                return Err(ParseError::at(
                    ParseErrorKind::UnexpectedSourceEnd,
                    line,
                    column,
                ));
            };
            match ch {
                '"' => {
                    let raw = &self.source[start..start + offset];
                    self.pos = start + offset + 1;
                    self.column += consumed;
                    return Ok(TokenKind::Str(raw));
                }
                '\\' => {
                    if chars.next().is_none() {
                        return Err(ParseError::at(
                            ParseErrorKind::UnexpectedSourceEnd,
                            line,
                            column,
                        ));
                    }
                    consumed += 2;
                }
                _ => consumed += 1,
            }
        }
    }

    /// The maximal run of number characters. Numeric grammar is not
    /// validated here; `--1` or `1.2.3` become tokens that fail native
    /// parsing later.
    fn number_literal(&mut self) -> TokenKind<'src> {
        let rest = &self.source[self.pos..];
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !is_number_char(ch))
            .map_or(rest.len(), |(offset, _)| offset);
        let raw = &rest[..len];
        self.pos += len;
        self.column += len as u32;
        TokenKind::Number(raw)
    }
}

/// Tokenize a whole source text into an ordered sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
