// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Unit Registry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit symbol table and unit-expression parser.
//!
//! Grammar:
//!
//! ```text
//! expr   := term (('*' | '/' | <juxtaposition>) term)*
//! term   := factor (('^' | '**') int)?
//! factor := number | symbol | '(' expr ')'
//! ```
//!
//! Symbols resolve by exact match first, then as SI prefix + symbol, so
//! `T` is tesla, `min` is minute and `mm` is millimetre.

use popcon_types::constants::{ATOMIC_MASS_UNIT, EV_TO_J, STANDARD_ATMOSPHERE};
use popcon_types::error::{PopconError, PopconResult};

use crate::dimension::Dimension;
use crate::unit::Unit;

const L: Dimension = Dimension::LENGTH;
const M: Dimension = Dimension::MASS;
const T: Dimension = Dimension::TIME;
const I: Dimension = Dimension::CURRENT;
const TH: Dimension = Dimension::TEMPERATURE;
const N: Dimension = Dimension::SUBSTANCE;
const J: Dimension = Dimension::LUMINOSITY;

/// One row of the symbol table.
struct UnitDef {
    symbol: &'static str,
    scale: f64,
    dimension: Dimension,
    prefixable: bool,
}

const fn def(symbol: &'static str, scale: f64, dimension: Dimension, prefixable: bool) -> UnitDef {
    UnitDef {
        symbol,
        scale,
        dimension,
        prefixable,
    }
}

//                       [L, M, T, I, Θ, N, J]
const ENERGY: [i32; 7] = [2, 1, -2, 0, 0, 0, 0];
const POWER: [i32; 7] = [2, 1, -3, 0, 0, 0, 0];
const PRESSURE: [i32; 7] = [-1, 1, -2, 0, 0, 0, 0];
const PER_VOLUME: [i32; 7] = [-3, 0, 0, 0, 0, 0, 0];

static UNITS: &[UnitDef] = &[
    def("m", 1.0, L, true),
    def("g", 1e-3, M, true),
    def("s", 1.0, T, true),
    def("A", 1.0, I, true),
    def("K", 1.0, TH, true),
    def("mol", 1.0, N, true),
    def("cd", 1.0, J, true),
    def("Hz", 1.0, Dimension::from_exponents([0, 0, -1, 0, 0, 0, 0]), true),
    def("N", 1.0, Dimension::from_exponents([1, 1, -2, 0, 0, 0, 0]), true),
    def("Pa", 1.0, Dimension::from_exponents(PRESSURE), true),
    def("J", 1.0, Dimension::from_exponents(ENERGY), true),
    def("W", 1.0, Dimension::from_exponents(POWER), true),
    def("C", 1.0, Dimension::from_exponents([0, 0, 1, 1, 0, 0, 0]), true),
    def("V", 1.0, Dimension::from_exponents([2, 1, -3, -1, 0, 0, 0]), true),
    def("T", 1.0, Dimension::from_exponents([0, 1, -2, -1, 0, 0, 0]), true),
    def("Wb", 1.0, Dimension::from_exponents([2, 1, -2, -1, 0, 0, 0]), true),
    def("H", 1.0, Dimension::from_exponents([2, 1, -2, -2, 0, 0, 0]), true),
    def("ohm", 1.0, Dimension::from_exponents([2, 1, -3, -2, 0, 0, 0]), true),
    def("L", 1e-3, Dimension::from_exponents([3, 0, 0, 0, 0, 0, 0]), true),
    def("bar", 1e5, Dimension::from_exponents(PRESSURE), true),
    def("atm", STANDARD_ATMOSPHERE, Dimension::from_exponents(PRESSURE), false),
    def("min", 60.0, T, false),
    def("h", 3600.0, T, false),
    def("eV", EV_TO_J, Dimension::from_exponents(ENERGY), true),
    def("u", ATOMIC_MASS_UNIT, M, false),
    def("amu", ATOMIC_MASS_UNIT, M, false),
    def("Da", ATOMIC_MASS_UNIT, M, true),
    def("n19", 1e19, Dimension::from_exponents(PER_VOLUME), false),
    def("n20", 1e20, Dimension::from_exponents(PER_VOLUME), false),
    def("percent", 1e-2, Dimension::DIMENSIONLESS, false),
    def("%", 1e-2, Dimension::DIMENSIONLESS, false),
    def("dimensionless", 1.0, Dimension::DIMENSIONLESS, false),
];

const ALIASES: &[(&str, &str)] = &[
    ("meter", "m"),
    ("metre", "m"),
    ("second", "s"),
    ("gram", "g"),
    ("kelvin", "K"),
    ("tesla", "T"),
    ("watt", "W"),
    ("joule", "J"),
    ("pascal", "Pa"),
    ("ampere", "A"),
    ("electron_volt", "eV"),
    ("hour", "h"),
    ("hr", "h"),
    ("Ohm", "ohm"),
    ("Ω", "ohm"),
];

/// Largest accepted magnitude of a base-dimension exponent in a parsed unit.
const MAX_EXPONENT: i32 = 64;

/// SI prefixes, two-character prefixes first.
const PREFIXES: &[(&str, f64)] = &[
    ("da", 1e1),
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("µ", 1e-6),
    ("μ", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
];

fn find_def(symbol: &str) -> Option<&'static UnitDef> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == symbol)
        .map_or(symbol, |(_, target)| *target);
    UNITS.iter().find(|d| d.symbol == canonical)
}

/// Resolve a single symbol (no operators) to a unit.
pub fn lookup_symbol(symbol: &str) -> Option<Unit> {
    if let Some(d) = find_def(symbol) {
        return Some(Unit::new(symbol, d.scale, d.dimension));
    }
    PREFIXES.iter().find_map(|(prefix, factor)| {
        let rest = symbol.strip_prefix(prefix)?;
        let d = UNITS.iter().find(|d| d.symbol == rest && d.prefixable)?;
        Some(Unit::new(symbol, factor * d.scale, d.dimension))
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64, String),
    Symbol(String),
    Mul,
    Div,
    Pow,
    LParen,
    RParen,
}

fn parse_error(input: &str, message: impl Into<String>) -> PopconError {
    PopconError::UnitParse {
        input: input.to_string(),
        message: message.into(),
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '%' || c == 'µ' || c == 'Ω'
}

/// Signs may only open an exponent: `m^-3`, `m**-3`, `m^(-3)`.
fn sign_allowed(tokens: &[Token]) -> bool {
    match tokens {
        [.., Token::Pow] => true,
        [.., Token::Pow, Token::LParen] => true,
        _ => false,
    }
}

fn tokenize(input: &str) -> PopconResult<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '*' if chars.get(i + 1) == Some(&'*') => {
                tokens.push(Token::Pow);
                i += 2;
            }
            '*' | '·' => {
                tokens.push(Token::Mul);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Div);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Pow);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '-' | '+' if !sign_allowed(&tokens) => {
                return Err(parse_error(
                    input,
                    format!("sign '{c}' is only allowed in an exponent"),
                ));
            }
            c if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' => {
                let start = i;
                i += 1;
                while i < chars.len() {
                    let d = chars[i];
                    let exponent_marker = (d == 'e' || d == 'E')
                        && chars
                            .get(i + 1)
                            .is_some_and(|n| n.is_ascii_digit() || *n == '-' || *n == '+');
                    if d.is_ascii_digit() || d == '.' {
                        i += 1;
                    } else if exponent_marker {
                        i += 2;
                    } else {
                        break;
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value: f64 = text
                    .parse()
                    .map_err(|_| parse_error(input, format!("invalid number '{text}'")))?;
                tokens.push(Token::Number(value, text));
            }
            c if is_symbol_char(c) => {
                let start = i;
                i += 1;
                while i < chars.len() && (is_symbol_char(chars[i]) || chars[i].is_ascii_digit()) {
                    i += 1;
                }
                tokens.push(Token::Symbol(chars[start..i].iter().collect()));
            }
            other => return Err(parse_error(input, format!("unexpected character '{other}'"))),
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        tok
    }

    /// Accept `unit` only with a finite positive scale and exponents
    /// within [`MAX_EXPONENT`].
    fn checked(&self, unit: Unit) -> PopconResult<Unit> {
        if !(unit.scale().is_finite() && unit.scale() > 0.0) {
            return Err(parse_error(
                self.input,
                format!("scale {} is not a finite positive number", unit.scale()),
            ));
        }
        if unit.dimension().exponents().iter().any(|e| e.abs() > MAX_EXPONENT) {
            return Err(parse_error(self.input, "dimension exponent out of range"));
        }
        Ok(unit)
    }

    fn overflow(&self) -> PopconError {
        parse_error(self.input, "dimension exponent out of range")
    }

    fn expr(&mut self) -> PopconResult<Unit> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Mul) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    acc = self.multiply(&acc, &rhs)?;
                }
                Some(Token::Div) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    acc.dimension()
                        .checked_div(rhs.dimension())
                        .ok_or_else(|| self.overflow())?;
                    acc = self.checked(&acc / &rhs)?;
                }
                Some(Token::Number(..)) | Some(Token::Symbol(_)) | Some(Token::LParen) => {
                    let rhs = self.term()?;
                    acc = self.multiply(&acc, &rhs)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn multiply(&self, lhs: &Unit, rhs: &Unit) -> PopconResult<Unit> {
        lhs.dimension()
            .checked_mul(rhs.dimension())
            .ok_or_else(|| self.overflow())?;
        self.checked(lhs * rhs)
    }

    fn term(&mut self) -> PopconResult<Unit> {
        let base = self.factor()?;
        if self.peek() != Some(&Token::Pow) {
            return Ok(base);
        }
        self.pos += 1;
        let exponent = self.exponent()?;
        base.dimension()
            .checked_powi(exponent)
            .ok_or_else(|| self.overflow())?;
        self.checked(base.powi(exponent))
    }

    fn exponent(&mut self) -> PopconResult<i32> {
        match self.advance() {
            Some(Token::Number(value, text)) => {
                if value.fract() != 0.0 || !value.is_finite() || value.abs() > 64.0 {
                    return Err(parse_error(
                        self.input,
                        format!("exponent '{text}' must be a small integer"),
                    ));
                }
                Ok(value as i32)
            }
            Some(Token::LParen) => {
                let n = self.exponent()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(n),
                    _ => Err(parse_error(self.input, "unclosed parenthesis in exponent")),
                }
            }
            _ => Err(parse_error(self.input, "expected an integer exponent")),
        }
    }

    fn factor(&mut self) -> PopconResult<Unit> {
        match self.advance() {
            Some(Token::Number(value, text)) => {
                self.checked(Unit::new(text, value, Dimension::DIMENSIONLESS))
            }
            Some(Token::Symbol(symbol)) => lookup_symbol(&symbol)
                .ok_or_else(|| parse_error(self.input, format!("unknown unit '{symbol}'"))),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(parse_error(self.input, "unclosed parenthesis")),
                }
            }
            Some(tok) => Err(parse_error(self.input, format!("unexpected token {tok:?}"))),
            None => Err(parse_error(self.input, "unexpected end of expression")),
        }
    }
}

/// Parse a unit expression. The resulting unit keeps the trimmed input as
/// its symbol.
pub fn parse_unit(input: &str) -> PopconResult<Unit> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(parse_error(input, "empty unit expression"));
    }
    let mut parser = Parser {
        input,
        tokens: tokenize(trimmed)?,
        pos: 0,
    };
    let unit = parser.expr()?;
    if let Some(tok) = parser.peek() {
        return Err(parse_error(input, format!("trailing token {tok:?}")));
    }
    Ok(Unit::new(trimmed, unit.scale(), unit.dimension()))
}
