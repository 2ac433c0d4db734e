//! Recursive descent parser.
//!
//! Consumes a token sequence left to right through a forward-only
//! cursor and builds a [`Value`] tree, one call frame per nested
//! container. The cursor is inspectable afterward so `parse_text` can
//! reject trailing tokens: the grammar permits exactly one top-level
//! value per document.
//!
//! Nesting is capped (default [`DEFAULT_MAX_DEPTH`]) so a hostile
//! document fails with a classifiable error instead of exhausting the
//! call stack.

use crate::codec;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::repr::{FloatRepr, IntRepr, NumberError, StringRepr};
use crate::value::{ObjectMap, Value};

/// Default nesting-depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A cursor over a token sequence.
pub struct Parser<'tok, 'src> {
    tokens: &'tok [Token<'src>],
    cursor: usize,
    max_depth: usize,
    depth: usize,
}

impl<'tok, 'src> Parser<'tok, 'src> {
    /// A parser over `tokens` with the default depth limit.
    pub fn new(tokens: &'tok [Token<'src>]) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    /// A parser over `tokens` with a caller-chosen depth limit.
    pub fn with_max_depth(tokens: &'tok [Token<'src>], max_depth: usize) -> Self {
        Self {
            tokens,
            cursor: 0,
            max_depth,
            depth: 0,
        }
    }

    /// The cursor position, in tokens consumed.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Whether every token has been consumed.
    pub fn is_finished(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.cursor).copied()
    }

    /// Parse one value starting at the cursor, leaving the cursor one
    /// past the value's last token.
    pub fn parse_value<I, F, S>(&mut self) -> Result<Value<I, F, S>, ParseError>
    where
        I: IntRepr,
        F: FloatRepr,
        S: StringRepr,
    {
        let Some(token) = self.peek() else {
            return Err(ParseError::plain(ParseErrorKind::UnexpectedSourceEnd));
        };

        match token.kind {
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::True => {
                self.cursor += 1;
                Ok(Value::Boolean(true))
            }
            TokenKind::False => {
                self.cursor += 1;
                Ok(Value::Boolean(false))
            }
            TokenKind::Null => {
                self.cursor += 1;
                Ok(Value::Null)
            }
            TokenKind::Str(raw) => {
                let payload = codec::decode(raw, token.line, token.column)?;
                self.cursor += 1;
                Ok(Value::String(payload))
            }
            TokenKind::Number(raw) => {
                let value = parse_number(raw, token.line, token.column)?;
                self.cursor += 1;
                Ok(value)
            }
            _ => {
                log::debug!(
                    "unexpected token at ({}, {})",
                    token.line,
                    token.column
                );
                Err(ParseError::at(
                    ParseErrorKind::UnexpectedToken,
                    token.line,
                    token.column,
                ))
            }
        }
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            let position = self.peek();
            log::debug!("nesting depth limit of {} exceeded", self.max_depth);
            return Err(match position {
                Some(token) => {
                    ParseError::at(ParseErrorKind::NestingTooDeep, token.line, token.column)
                }
                None => ParseError::plain(ParseErrorKind::NestingTooDeep),
            });
        }
        Ok(())
    }

    fn parse_array<I, F, S>(&mut self) -> Result<Value<I, F, S>, ParseError>
    where
        I: IntRepr,
        F: FloatRepr,
        S: StringRepr,
    {
        self.enter_container()?;
        self.cursor += 1; // consume '['

        let mut elements = Vec::new();

        if let Some(token) = self.peek() {
            if token.kind == TokenKind::RightBracket {
                self.cursor += 1;
                self.depth -= 1;
                return Ok(Value::Array(elements));
            }
        }

        loop {
            elements.push(self.parse_value()?);

            let Some(token) = self.peek() else {
                log::debug!("source ended before an array was completely parsed");
                return Err(ParseError::plain(ParseErrorKind::UnexpectedSourceEnd));
            };
            match token.kind {
                TokenKind::Comma => self.cursor += 1,
                TokenKind::RightBracket => {
                    self.cursor += 1;
                    break;
                }
                _ => {
                    return Err(ParseError::at(
                        ParseErrorKind::UnexpectedToken,
                        token.line,
                        token.column,
                    ));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(elements))
    }

    fn parse_object<I, F, S>(&mut self) -> Result<Value<I, F, S>, ParseError>
    where
        I: IntRepr,
        F: FloatRepr,
        S: StringRepr,
    {
        self.enter_container()?;
        self.cursor += 1; // consume '{'

        let mut members: ObjectMap<S, Value<I, F, S>> = ObjectMap::default();

        if let Some(token) = self.peek() {
            if token.kind == TokenKind::RightBrace {
                self.cursor += 1;
                self.depth -= 1;
                return Ok(Value::Object(members));
            }
        }

        loop {
            // Key.
            let Some(token) = self.peek() else {
                return Err(ParseError::plain(ParseErrorKind::UnexpectedSourceEnd));
            };
            let key: S = match token.kind {
                TokenKind::Str(raw) => codec::decode(raw, token.line, token.column)?,
                _ => {
                    return Err(ParseError::at(
                        ParseErrorKind::UnexpectedToken,
                        token.line,
                        token.column,
                    ));
                }
            };
            self.cursor += 1;

            // Colon.
            let Some(token) = self.peek() else {
                return Err(ParseError::plain(ParseErrorKind::UnexpectedSourceEnd));
            };
            if token.kind != TokenKind::Colon {
                return Err(ParseError::at(
                    ParseErrorKind::UnexpectedToken,
                    token.line,
                    token.column,
                ));
            }
            self.cursor += 1;

            // Value; a duplicate key overwrites the prior member.
            let value = self.parse_value()?;
            members.insert(key, value);

            let Some(token) = self.peek() else {
                log::debug!("source ended before an object was completely parsed");
                return Err(ParseError::plain(ParseErrorKind::UnexpectedSourceEnd));
            };
            match token.kind {
                TokenKind::Comma => self.cursor += 1,
                TokenKind::RightBrace => {
                    self.cursor += 1;
                    break;
                }
                _ => {
                    return Err(ParseError::at(
                        ParseErrorKind::UnexpectedToken,
                        token.line,
                        token.column,
                    ));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }
}

/// Classify and parse a number token.
///
/// A literal `.` anywhere in the text selects the float branch; exponent
/// notation alone does not, so `1e10` is attempted as an integer and
/// fails its native parse.
fn parse_number<I, F, S>(raw: &str, line: u32, column: u32) -> Result<Value<I, F, S>, ParseError>
where
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    if raw.contains('.') {
        match F::parse_decimal(raw) {
            Ok(value) => Ok(Value::Float(value)),
            Err(NumberError::Malformed) => Err(ParseError::at(
                ParseErrorKind::IncorrectNumberFormat,
                line,
                column,
            )),
            Err(NumberError::OutOfRange) => {
                log::debug!("number at ({line}, {column}) out of float representation range");
                Err(ParseError::at(
                    ParseErrorKind::FloatingPointTypeTooNarrow,
                    line,
                    column,
                ))
            }
        }
    } else {
        match I::parse_decimal(raw) {
            Ok(value) => Ok(Value::Integer(value)),
            Err(NumberError::Malformed) => Err(ParseError::at(
                ParseErrorKind::IncorrectNumberFormat,
                line,
                column,
            )),
            Err(NumberError::OutOfRange) => {
                log::debug!("number at ({line}, {column}) out of integer representation range");
                Err(ParseError::at(
                    ParseErrorKind::IntegerTypeTooNarrow,
                    line,
                    column,
                ))
            }
        }
    }
}

/// Parse JSON source text into a value tree.
///
/// Empty source fails immediately with `UnexpectedSourceEnd`; trailing
/// tokens after the single top-level value are `UnexpectedToken`.
pub fn parse_text<I, F, S>(source: &str) -> Result<Value<I, F, S>, ParseError>
where
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    parse_text_with_depth(source, DEFAULT_MAX_DEPTH)
}

/// [`parse_text`] with a caller-chosen nesting-depth limit.
pub fn parse_text_with_depth<I, F, S>(
    source: &str,
    max_depth: usize,
) -> Result<Value<I, F, S>, ParseError>
where
    I: IntRepr,
    F: FloatRepr,
    S: StringRepr,
{
    if source.is_empty() {
        log::debug!("source was empty");
        return Err(ParseError::plain(ParseErrorKind::UnexpectedSourceEnd));
    }

    let tokens = tokenize(source)?;
    let mut parser = Parser::with_max_depth(&tokens, max_depth);
    let value = parser.parse_value()?;

    if let Some(token) = parser.peek() {
        log::debug!(
            "trailing token at ({}, {}) after the top-level value",
            token.line,
            token.column
        );
        return Err(ParseError::at(
            ParseErrorKind::UnexpectedToken,
            token.line,
            token.column,
        ));
    }

    log::trace!("source parsed successfully ({} tokens)", tokens.len());
    Ok(value)
}
