//! Scalar numeric-value tokenization
//!
//! Splits a raw CSS value string into sign, integer digits, fraction digits,
//! and a trailing unit. Anything that is not a single numeric scalar token
//! (function calls, `var()` references, keywords, multi-token shorthands)
//! is reported as not numeric and left untouched by the downstream rules.

use std::fmt;

/// Authored sign of a numeric token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Unsigned,
}

impl Sign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
            Sign::Unsigned => "",
        }
    }
}

/// A tokenized numeric CSS value
///
/// Invariant: `integer_part` and `fraction_part` are never both empty.
/// Digits are ASCII `0-9`; exponent notation is not modeled (CSS does not
/// use it for plain lengths).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericToken {
    pub sign: Sign,
    pub integer_part: String,
    pub fraction_part: String,
    /// Substring following the last digit; empty means unitless
    pub unit: String,
}

impl NumericToken {
    /// True when the decimal magnitude is exactly zero
    pub fn is_zero(&self) -> bool {
        self.integer_part.chars().all(|c| c == '0')
            && self.fraction_part.chars().all(|c| c == '0')
    }
}

impl fmt::Display for NumericToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.as_str(), self.integer_part)?;
        if !self.fraction_part.is_empty() {
            write!(f, ".{}", self.fraction_part)?;
        }
        write!(f, "{}", self.unit)
    }
}

struct ValueScanner {
    input: Vec<char>,
    position: usize,
}

impl ValueScanner {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.input[self.position];
        self.position += 1;
        ch
    }

    fn read_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(self.advance());
            } else {
                break;
            }
        }
        digits
    }

    fn remainder(&self) -> String {
        self.input[self.position..].iter().collect()
    }
}

/// Characters that may appear in a plausible CSS unit suffix: ASCII letters,
/// `%`, and the identifier continuation characters `-` and `_`.
fn is_unit_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '%' || ch == '-' || ch == '_'
}

/// Tokenize a scalar value string, or `None` if it is not a numeric literal
///
/// Grammar: optional `+`/`-` sign, maximal digit run, optional `.` plus
/// maximal digit run, then a unit tail. A `.` not followed by a digit is not
/// consumed as part of the number. Returns `None` when no digits were read
/// or when the tail contains a character outside the unit-suffix class.
pub fn tokenize(text: &str) -> Option<NumericToken> {
    let mut scanner = ValueScanner::new(text);

    let sign = match scanner.peek() {
        Some('+') => {
            scanner.advance();
            Sign::Positive
        }
        Some('-') => {
            scanner.advance();
            Sign::Negative
        }
        _ => Sign::Unsigned,
    };

    let integer_part = scanner.read_digits();

    let mut fraction_part = String::new();
    if scanner.peek() == Some('.') && scanner.peek_next().map_or(false, |c| c.is_ascii_digit()) {
        scanner.advance();
        fraction_part = scanner.read_digits();
    }

    if integer_part.is_empty() && fraction_part.is_empty() {
        return None;
    }

    let unit = scanner.remainder();
    if !unit.chars().all(is_unit_char) {
        return None;
    }

    Some(NumericToken {
        sign,
        integer_part,
        fraction_part,
        unit,
    })
}
