//! Literal lexer built on logos.
//!
//! Produces the flat token list the literal parser walks. There is no
//! identifier token: any word that is not `True`, `False`, `None` or
//! `set()` fails to lex, which is what routes operator names away from the
//! literal grammar.

use logos::Logos;

use crate::LiteralError;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[token("True")]
    True,
    #[token("False")]
    False,
    #[token("None")]
    None,
    #[token("set()")]
    EmptySet,

    // Non-zero decimals may not carry leading zeros; `0`, `00`, `0_0` are fine.
    #[regex(r"0[xX](_?[0-9a-fA-F])+")]
    #[regex(r"0[oO](_?[0-7])+")]
    #[regex(r"0[bB](_?[01])+")]
    #[regex(r"[1-9](_?[0-9])*")]
    #[regex(r"0(_?0)*")]
    Int,

    #[regex(r"[0-9](_?[0-9])*\.([0-9](_?[0-9])*)?([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9](_?[0-9])*")]
    Float,

    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    #[regex(r"'([^'\\\n\r]|\\.)*'")]
    Str,
}

/// A token paired with its source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lexeme<'src> {
    pub kind: RawToken,
    pub text: &'src str,
}

/// Lex `source` completely, failing on the first unrecognized character.
pub(crate) fn lex(source: &str) -> Result<Vec<Lexeme<'_>>, LiteralError> {
    let mut lexer = RawToken::lexer(source);
    let mut out = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(kind) => out.push(Lexeme {
                kind,
                text: lexer.slice(),
            }),
            Err(()) => return Err(LiteralError::malformed("unrecognized character")),
        }
    }

    Ok(out)
}
