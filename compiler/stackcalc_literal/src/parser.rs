//! Recursive descent parser for the literal grammar.
//!
//! ```text
//! value    := signed | scalar | tuple | list | brace
//! signed   := ('+' | '-') '('* number ')'*
//! scalar   := INT | FLOAT | STRING | True | False | None | set()
//! tuple    := '(' ')' | '(' value ')' | '(' value ',' [value (',' value)* [',']] ')'
//! list     := '[' [value (',' value)* [',']] ']'
//! brace    := '{' '}' | '{' value ':' value (',' value ':' value)* [','] '}'
//!           | '{' value (',' value)* [','] '}'
//! ```
//!
//! `(value)` without a comma is the value itself, not a one-element tuple.
//! The parser only ever builds data; there is no name lookup, call, or
//! operator evaluation anywhere in the grammar.

use crate::escape::unescape_string;
use crate::lexer::{lex, Lexeme, RawToken};
use crate::parse_helpers::{parse_float_skip_underscores, parse_int_literal};
use crate::stack_guard::ensure_sufficient_stack;
use crate::{LiteralError, Value};

/// Parse a complete literal.
///
/// Fails with [`LiteralError::Malformed`] unless the whole of `source` is a
/// single literal.
pub fn parse_literal(source: &str) -> Result<Value, LiteralError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let value = parser.parse_value()?;
    if parser.pos == tokens.len() {
        Ok(value)
    } else {
        Err(LiteralError::malformed("trailing input after literal"))
    }
}

struct Parser<'a, 'src> {
    tokens: &'a [Lexeme<'src>],
    pos: usize,
}

impl<'src> Parser<'_, 'src> {
    fn bump(&mut self) -> Option<Lexeme<'src>> {
        let lexeme = self.tokens.get(self.pos).copied();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    fn eat(&mut self, kind: RawToken) -> bool {
        if self.tokens.get(self.pos).is_some_and(|l| l.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: RawToken, reason: &'static str) -> Result<(), LiteralError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(LiteralError::malformed(reason))
        }
    }

    fn parse_value(&mut self) -> Result<Value, LiteralError> {
        ensure_sufficient_stack(|| self.parse_value_inner())
    }

    fn parse_value_inner(&mut self) -> Result<Value, LiteralError> {
        let Some(lexeme) = self.bump() else {
            return Err(LiteralError::malformed("unexpected end of literal"));
        };

        match lexeme.kind {
            RawToken::Plus => self.parse_signed(false),
            RawToken::Minus => self.parse_signed(true),
            RawToken::Int => int_value(lexeme.text, false),
            RawToken::Float => float_value(lexeme.text, false),
            RawToken::Str => unescape_string(strip_quotes(lexeme.text)).map(Value::Str),
            RawToken::True => Ok(Value::Bool(true)),
            RawToken::False => Ok(Value::Bool(false)),
            RawToken::None => Ok(Value::None),
            RawToken::EmptySet => Ok(Value::Set(Vec::new())),
            RawToken::LParen => self.parse_paren(),
            RawToken::LBracket => self.parse_items(RawToken::RBracket).map(Value::List),
            RawToken::LBrace => self.parse_brace(),
            RawToken::RParen
            | RawToken::RBracket
            | RawToken::RBrace
            | RawToken::Comma
            | RawToken::Colon => Err(LiteralError::malformed("unexpected delimiter")),
        }
    }

    /// A sign applies to exactly one number, optionally parenthesised.
    fn parse_signed(&mut self, negative: bool) -> Result<Value, LiteralError> {
        let mut depth = 0usize;
        while self.eat(RawToken::LParen) {
            depth += 1;
        }

        let value = match self.bump() {
            Some(Lexeme {
                kind: RawToken::Int,
                text,
            }) => int_value(text, negative)?,
            Some(Lexeme {
                kind: RawToken::Float,
                text,
            }) => float_value(text, negative)?,
            _ => return Err(LiteralError::malformed("sign must precede a number")),
        };

        for _ in 0..depth {
            self.expect(RawToken::RParen, "unbalanced parenthesis")?;
        }
        Ok(value)
    }

    fn parse_paren(&mut self) -> Result<Value, LiteralError> {
        if self.eat(RawToken::RParen) {
            return Ok(Value::Tuple(Vec::new()));
        }

        let first = self.parse_value()?;
        if self.eat(RawToken::RParen) {
            return Ok(first);
        }

        self.expect(RawToken::Comma, "expected ',' or ')'")?;
        let mut items = vec![first];
        items.extend(self.parse_items(RawToken::RParen)?);
        Ok(Value::Tuple(items))
    }

    /// Comma-separated values up to and including `close`; a trailing
    /// comma is allowed.
    fn parse_items(&mut self, close: RawToken) -> Result<Vec<Value>, LiteralError> {
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                return Ok(items);
            }
            items.push(self.parse_value()?);
            if self.eat(close) {
                return Ok(items);
            }
            self.expect(RawToken::Comma, "expected ',' between items")?;
        }
    }

    fn parse_brace(&mut self) -> Result<Value, LiteralError> {
        if self.eat(RawToken::RBrace) {
            return Value::dict(Vec::new());
        }

        let first = self.parse_value()?;
        if self.eat(RawToken::Colon) {
            let first_value = self.parse_value()?;
            let mut entries = vec![(first, first_value)];
            loop {
                if self.eat(RawToken::RBrace) {
                    break;
                }
                self.expect(RawToken::Comma, "expected ',' between entries")?;
                if self.eat(RawToken::RBrace) {
                    break;
                }
                let key = self.parse_value()?;
                self.expect(RawToken::Colon, "expected ':' after dict key")?;
                entries.push((key, self.parse_value()?));
            }
            return Value::dict(entries);
        }

        let mut members = vec![first];
        loop {
            if self.eat(RawToken::RBrace) {
                break;
            }
            self.expect(RawToken::Comma, "expected ',' between set members")?;
            if self.eat(RawToken::RBrace) {
                break;
            }
            members.push(self.parse_value()?);
        }
        Value::set(members)
    }
}

fn strip_quotes(text: &str) -> &str {
    // The lexer guarantees a matching one-byte quote at both ends.
    &text[1..text.len() - 1]
}

fn int_value(text: &str, negative: bool) -> Result<Value, LiteralError> {
    let too_large = || LiteralError::IntegerTooLarge {
        text: text.to_string(),
    };
    let magnitude = i128::from(parse_int_literal(text).ok_or_else(too_large)?);
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed)
        .map(Value::Int)
        .map_err(|_| too_large())
}

fn float_value(text: &str, negative: bool) -> Result<Value, LiteralError> {
    let value = parse_float_skip_underscores(text)
        .ok_or(LiteralError::malformed("invalid float literal"))?;
    Ok(Value::Float(if negative { -value } else { value }))
}

#[cfg(test)]
mod tests;
