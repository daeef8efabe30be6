use crate::ast::{
    ColorStop, ColorValue, Gradient, GradientKind, Length, Orientation, PositionTerm,
    RadialEndingShape, RadialExtent, RadialShape, Side,
};
use crate::error::ParseError;
use crate::lexer::{Lexer, Spanned, Token, Unit};

static EOF: Spanned = Spanned { token: Token::Eof, offset: 0 };

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek_spanned(&self) -> &Spanned {
        self.tokens.get(self.pos).or(self.tokens.last()).unwrap_or(&EOF)
    }

    fn peek(&self) -> &Token {
        &self.peek_spanned().token
    }

    fn offset(&self) -> usize {
        self.peek_spanned().offset
    }

    fn advance(&mut self) -> Spanned {
        let tok = self.peek_spanned().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expected(&self, expected: &'static str) -> ParseError {
        ParseError::Expected { expected, found: self.peek().describe(), offset: self.offset() }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), ParseError> {
        if self.peek() == &token {
            self.advance();
            Ok(())
        } else {
            Err(self.expected(expected))
        }
    }

    fn peek_ident(&self) -> Option<&str> {
        match self.peek() {
            Token::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    // ── Gradient list ─────────────────────────────────────────────────────

    /// `gradient ( ',' gradient )* EOF`
    pub fn parse_list(&mut self) -> Result<Vec<Gradient>, ParseError> {
        let mut out = vec![self.parse_gradient()?];
        while self.peek() == &Token::Comma {
            self.advance();
            out.push(self.parse_gradient()?);
        }
        if self.peek() != &Token::Eof {
            return Err(self.expected("`,` or end of input"));
        }
        Ok(out)
    }

    /// `kind '(' [ orientation ',' ] stop ( ',' stop )* ')'`
    pub fn parse_gradient(&mut self) -> Result<Gradient, ParseError> {
        let start = self.offset();
        let name = match self.peek_ident() {
            Some(name) => name.to_string(),
            None => return Err(self.expected("gradient function")),
        };
        let kind = GradientKind::from_function_name(&name)
            .ok_or(ParseError::UnsupportedKind { name, offset: start })?;
        self.advance();
        self.expect(Token::LParen, "`(`")?;

        let orientation = match kind {
            GradientKind::Linear => self.parse_linear_orientation()?,
            GradientKind::Radial => self.parse_radial_shape()?.map(Orientation::Radial),
        };
        if orientation.is_some() {
            self.expect(Token::Comma, "`,` after orientation")?;
        }

        if self.peek() == &Token::RParen {
            return Err(ParseError::NoColorStops { offset: self.offset() });
        }
        let mut stops = vec![self.parse_stop()?];
        while self.peek() == &Token::Comma {
            self.advance();
            stops.push(self.parse_stop()?);
        }
        self.expect(Token::RParen, "`,` or `)`")?;

        Ok(Gradient::new(kind, orientation, stops))
    }

    // ── Orientation ───────────────────────────────────────────────────────

    fn parse_linear_orientation(&mut self) -> Result<Option<Orientation>, ParseError> {
        match self.peek() {
            Token::Dimension(deg, Unit::Deg) => {
                let deg = *deg;
                self.advance();
                Ok(Some(Orientation::Angle(deg)))
            }
            Token::Ident(word) if word == "to" => {
                self.advance();
                let mut sides = Vec::with_capacity(2);
                while let Some(side) = self.peek_ident().and_then(Side::from_keyword) {
                    self.advance();
                    sides.push(side);
                    if sides.len() == 2 {
                        break;
                    }
                }
                if sides.is_empty() {
                    return Err(self.expected("side keyword after `to`"));
                }
                Ok(Some(Orientation::Directional(sides)))
            }
            _ => Ok(None),
        }
    }

    /// `[ shape ] [ extent ] [ 'at' position ]` in either shape/extent order.
    fn parse_radial_shape(&mut self) -> Result<Option<RadialShape>, ParseError> {
        let mut radial = RadialShape::default();
        let mut seen = false;

        loop {
            let Some(word) = self.peek_ident() else { break };
            if radial.shape.is_none() {
                if let Some(shape) = RadialEndingShape::from_keyword(word) {
                    radial.shape = Some(shape);
                    seen = true;
                    self.advance();
                    continue;
                }
            }
            if radial.extent.is_none() {
                if let Some(extent) = RadialExtent::from_keyword(word) {
                    radial.extent = Some(extent);
                    seen = true;
                    self.advance();
                    continue;
                }
            }
            break;
        }

        if self.peek_ident() == Some("at") {
            self.advance();
            while radial.at.len() < 2 {
                match self.peek() {
                    Token::Ident(word) if is_position_keyword(word) => {
                        radial.at.push(PositionTerm::Keyword(word.clone()));
                        self.advance();
                    }
                    Token::Dimension(..) => {
                        let length = self.parse_length()?;
                        radial.at.push(PositionTerm::Length(length));
                    }
                    _ => break,
                }
            }
            if radial.at.is_empty() {
                return Err(self.expected("position after `at`"));
            }
            seen = true;
        }

        Ok(seen.then_some(radial))
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    fn parse_stop(&mut self) -> Result<ColorStop, ParseError> {
        let color = self.parse_color()?;
        let length = match self.peek() {
            Token::Dimension(_, Unit::Percent | Unit::Px | Unit::Em) => Some(self.parse_length()?),
            _ => None,
        };
        Ok(ColorStop::new(color, length))
    }

    fn parse_length(&mut self) -> Result<Length, ParseError> {
        match self.peek() {
            Token::Dimension(v, Unit::Percent) => {
                let v = *v;
                self.advance();
                Ok(Length::Percent(v))
            }
            Token::Dimension(v, Unit::Px) => {
                let v = *v;
                self.advance();
                Ok(Length::Px(v))
            }
            Token::Dimension(v, Unit::Em) => {
                let v = *v;
                self.advance();
                Ok(Length::Em(v))
            }
            _ => Err(self.expected("length")),
        }
    }

    fn parse_color(&mut self) -> Result<ColorValue, ParseError> {
        let offset = self.offset();
        match self.advance().token {
            Token::Hash(digits) => Ok(ColorValue::Hex(digits)),
            Token::Ident(name) if name == "rgb" || name == "rgba" => {
                let function: &'static str = if name == "rgb" { "rgb" } else { "rgba" };
                let channels = self.parse_channels()?;
                match (function, channels.as_slice()) {
                    ("rgb", &[r, g, b]) => Ok(ColorValue::Rgb { r, g, b }),
                    ("rgba", &[r, g, b, a]) => Ok(ColorValue::Rgba { r, g, b, a }),
                    _ => Err(ParseError::ChannelCount {
                        function,
                        expected: if function == "rgb" { 3 } else { 4 },
                        got: channels.len(),
                        offset,
                    }),
                }
            }
            Token::Ident(name) if !is_reserved_keyword(&name) => Ok(ColorValue::Literal(name)),
            other => Err(ParseError::Expected {
                expected: "color",
                found: other.describe(),
                offset,
            }),
        }
    }

    /// `'(' number ( ',' number )* ')'`
    fn parse_channels(&mut self) -> Result<Vec<f64>, ParseError> {
        self.expect(Token::LParen, "`(` after color function")?;
        let mut channels = Vec::with_capacity(4);
        loop {
            match self.peek() {
                Token::Number(v) => {
                    channels.push(*v);
                    self.advance();
                }
                _ => return Err(self.expected("channel value")),
            }
            match self.peek() {
                Token::Comma => {
                    self.advance();
                }
                Token::RParen => {
                    self.advance();
                    return Ok(channels);
                }
                _ => return Err(self.expected("`,` or `)` in color channels")),
            }
        }
    }
}

fn is_position_keyword(word: &str) -> bool {
    matches!(word, "left" | "right" | "top" | "bottom" | "center")
}

/// Keywords that may never be read as a named color.
fn is_reserved_keyword(word: &str) -> bool {
    word == "to"
        || word == "at"
        || word.ends_with("-gradient")
        || RadialEndingShape::from_keyword(word).is_some()
        || RadialExtent::from_keyword(word).is_some()
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parses a comma-separated list of gradients.
pub fn try_parse_all(src: &str) -> Result<Vec<Gradient>, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_list()
}

/// Parses a gradient string and returns the first gradient.
pub fn try_parse(src: &str) -> Result<Gradient, ParseError> {
    let mut list = try_parse_all(src)?;
    // `parse_list` always yields at least one gradient.
    Ok(list.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(src: &str) -> Gradient {
        try_parse(src).unwrap()
    }

    fn err(src: &str) -> ParseError {
        try_parse(src).unwrap_err()
    }

    #[test]
    fn linear_with_angle() {
        let g = ok("linear-gradient(135deg, rgb(6,147,227) 0%, rgb(155,81,224) 100%)");
        assert_eq!(g.kind, GradientKind::Linear);
        assert_eq!(g.orientation, Some(Orientation::Angle(135.0)));
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].color, ColorValue::Rgb { r: 6.0, g: 147.0, b: 227.0 });
        assert_eq!(g.stops[0].length, Some(Length::Percent(0.0)));
        assert_eq!(g.stops[1].length, Some(Length::Percent(100.0)));
    }

    #[test]
    fn whitespace_and_case_are_tolerated() {
        let a = ok("linear-gradient(135deg, rgba(6, 147, 227, 1) 0%, rgb(155, 81, 224) 100%)");
        let b = ok("  LINEAR-GRADIENT( 135DEG ,RGBA( 6,147,227,1 )0% , rgb(155,81,224)100% )  ");
        assert_eq!(a, b);
    }

    #[test]
    fn stops_without_orientation() {
        let g = ok("linear-gradient(rgb(0,0,0), rgb(255,255,255))");
        assert_eq!(g.orientation, None);
        assert!(g.stops.iter().all(|s| s.length.is_none()));
    }

    #[test]
    fn directional_orientation() {
        let g = ok("linear-gradient(to top right, #fff 0%, red 100%)");
        assert_eq!(g.orientation, Some(Orientation::Directional(vec![Side::Top, Side::Right])));
        assert_eq!(g.stops[0].color, ColorValue::Hex("fff".into()));
        assert_eq!(g.stops[1].color, ColorValue::Literal("red".into()));
    }

    #[test]
    fn radial_prelude() {
        let g = ok("radial-gradient(circle farthest-corner at 50% top, rgb(1,2,3) 0%, rgb(4,5,6) 100%)");
        let Some(Orientation::Radial(shape)) = g.orientation else { panic!("expected radial prelude") };
        assert_eq!(shape.shape, Some(RadialEndingShape::Circle));
        assert_eq!(shape.extent, Some(RadialExtent::FarthestCorner));
        assert_eq!(
            shape.at,
            vec![PositionTerm::Length(Length::Percent(50.0)), PositionTerm::Keyword("top".into())]
        );
    }

    #[test]
    fn radial_without_prelude() {
        let g = ok("radial-gradient(rgb(1,2,3) 0%, rgb(4,5,6) 100%)");
        assert_eq!(g.kind, GradientKind::Radial);
        assert_eq!(g.orientation, None);
    }

    #[test]
    fn non_percent_lengths_are_kept() {
        let g = ok("linear-gradient(90deg, rgb(1,2,3) 10px, rgb(4,5,6) 2em, rgb(7,8,9))");
        assert_eq!(g.stops[0].length, Some(Length::Px(10.0)));
        assert_eq!(g.stops[1].length, Some(Length::Em(2.0)));
        assert_eq!(g.stops[2].length, None);
    }

    #[test]
    fn fractional_alpha_and_positions() {
        let g = ok("linear-gradient(rgba(0,0,0,0.35) 12.5%, rgb(1,1,1) 87.5%)");
        assert_eq!(g.stops[0].color, ColorValue::Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.35 });
        assert_eq!(g.stops[0].position_percent(), Some(12.5));
    }

    #[test]
    fn single_stop_is_accepted() {
        assert_eq!(ok("linear-gradient(90deg, rgb(1,2,3) 0%)").stops.len(), 1);
    }

    #[test]
    fn list_of_gradients() {
        let all = try_parse_all("linear-gradient(red, blue), radial-gradient(circle, #000, #fff)").unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].kind, GradientKind::Radial);
        // `try_parse` keeps only the first.
        assert_eq!(ok("linear-gradient(red, blue), radial-gradient(#000, #fff)").kind, GradientKind::Linear);
    }

    #[test]
    fn err_unsupported_kind() {
        assert!(matches!(err("conic-gradient(red, blue)"), ParseError::UnsupportedKind { .. }));
        assert!(matches!(
            err("repeating-linear-gradient(red, blue)"),
            ParseError::UnsupportedKind { .. }
        ));
    }

    #[test]
    fn err_channel_count() {
        assert!(matches!(
            err("linear-gradient(rgb(1,2) 0%, rgb(1,2,3) 100%)"),
            ParseError::ChannelCount { function: "rgb", expected: 3, got: 2, .. }
        ));
        assert!(matches!(
            err("linear-gradient(rgba(1,2,3) 0%)"),
            ParseError::ChannelCount { function: "rgba", expected: 4, got: 3, .. }
        ));
    }

    #[test]
    fn err_no_stops() {
        assert!(matches!(err("linear-gradient(135deg)"), ParseError::Expected { .. }));
        assert!(matches!(err("linear-gradient()"), ParseError::NoColorStops { .. }));
    }

    #[test]
    fn err_malformed() {
        err("");
        err("not a gradient");
        err("linear-gradient(135deg, rgb(1,2,3) 0%");
        err("linear-gradient(135deg rgb(1,2,3) 0%)");
        err("linear-gradient(to, red, blue)");
        err("linear-gradient(red, blue) trailing");
        err("linear-gradient(red 10deg, blue)");
    }
}
