use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

/// Unit suffix attached directly to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Deg,
    Percent,
    Px,
    Em,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier or keyword, lowercased (`linear-gradient`, `rgb`, `to`, `red`).
    Ident(String),
    /// Unitless number.
    Number(f64),
    /// Number with a unit suffix (`135deg`, `40%`, `12px`).
    Dimension(f64, Unit),
    /// Hex digits after `#`, lowercased.
    Hash(String),
    LParen,
    RParen,
    Comma,
    Eof,
}

impl Token {
    /// Short human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(s) => format!("identifier {s:?}"),
            Token::Number(n) => format!("number {n}"),
            Token::Dimension(n, unit) => format!("dimension {n}{unit:?}"),
            Token::Hash(h) => format!("color #{h}"),
            Token::LParen => "`(`".to_string(),
            Token::RParen => "`)`".to_string(),
            Token::Comma => "`,`".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// A token plus the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    /// Tokenizes the whole input. The last token is always [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let eof = tok.token == Token::Eof;
            tokens.push(tok);
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut it = self.src[self.pos..].chars();
        it.next();
        it.next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn next_token(&mut self) -> Result<Spanned, ParseError> {
        self.eat_while(char::is_whitespace);
        let offset = self.pos;

        let ch = match self.peek() {
            None => return Ok(Spanned { token: Token::Eof, offset }),
            Some(c) => c,
        };

        let token = match ch {
            '(' => { self.advance(); Token::LParen }
            ')' => { self.advance(); Token::RParen }
            ',' => { self.advance(); Token::Comma }
            '#' => self.lex_hash(offset)?,
            c if c.is_ascii_digit() || c == '.' => self.lex_number(offset)?,
            '-' | '+' if matches!(self.peek_second(), Some(c) if c.is_ascii_digit() || c == '.') => {
                self.lex_number(offset)?
            }
            c if c.is_ascii_alphabetic() => {
                let word = self.eat_while(|c| c.is_ascii_alphanumeric() || c == '-');
                Token::Ident(word.to_ascii_lowercase())
            }
            other => return Err(ParseError::UnexpectedChar { ch: other, offset }),
        };
        Ok(Spanned { token, offset })
    }

    fn lex_hash(&mut self, offset: usize) -> Result<Token, ParseError> {
        self.advance(); // consume `#`
        let digits = self.eat_while(|c| c.is_ascii_alphanumeric());
        let all_hex = digits.chars().all(|c| c.is_ascii_hexdigit());
        if !all_hex || !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return Err(ParseError::InvalidHex { digits: digits.len(), offset });
        }
        Ok(Token::Hash(digits.to_ascii_lowercase()))
    }

    fn lex_number(&mut self, offset: usize) -> Result<Token, ParseError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }
        self.eat_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.advance();
            self.eat_while(|c| c.is_ascii_digit());
        }
        let text = &self.src[start..self.pos];
        let value = text
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber { text: text.to_string(), offset })?;

        if self.peek() == Some('%') {
            self.advance();
            return Ok(Token::Dimension(value, Unit::Percent));
        }

        let unit_offset = self.pos;
        let unit = self.eat_while(|c| c.is_ascii_alphabetic());
        if unit.is_empty() {
            return Ok(Token::Number(value));
        }
        let unit = match unit.to_ascii_lowercase().as_str() {
            "deg" => Unit::Deg,
            "px" => Unit::Px,
            "em" => Unit::Em,
            other => {
                return Err(ParseError::UnknownUnit { unit: other.to_string(), offset: unit_offset });
            }
        };
        Ok(Token::Dimension(value, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn function_names_are_lowercased() {
        assert_eq!(
            tokens("Linear-Gradient("),
            vec![Token::Ident("linear-gradient".into()), Token::LParen, Token::Eof]
        );
    }

    #[test]
    fn dimensions_and_numbers() {
        assert_eq!(
            tokens("135deg 40% 12px 1.5em 0.25 -3"),
            vec![
                Token::Dimension(135.0, Unit::Deg),
                Token::Dimension(40.0, Unit::Percent),
                Token::Dimension(12.0, Unit::Px),
                Token::Dimension(1.5, Unit::Em),
                Token::Number(0.25),
                Token::Number(-3.0),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn leading_dot_number() {
        assert_eq!(tokens(".5"), vec![Token::Number(0.5), Token::Eof]);
    }

    #[test]
    fn offsets_point_at_token_start() {
        let spans = Lexer::new("rgb( 1 ,2)").tokenize().unwrap();
        let offsets: Vec<usize> = spans.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 3, 5, 7, 8, 9, 10]);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(tokens("#ABC"), vec![Token::Hash("abc".into()), Token::Eof]);
        assert!(matches!(
            Lexer::new("#abcde").tokenize(),
            Err(ParseError::InvalidHex { digits: 5, offset: 0 })
        ));
        assert!(Lexer::new("#ggg").tokenize().is_err());
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(matches!(
            Lexer::new("10rad").tokenize(),
            Err(ParseError::UnknownUnit { offset: 2, .. })
        ));
    }

    #[test]
    fn rejects_stray_characters() {
        assert!(matches!(
            Lexer::new("rgb(1;2)").tokenize(),
            Err(ParseError::UnexpectedChar { ch: ';', offset: 5 })
        ));
    }
}
