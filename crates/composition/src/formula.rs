//! Plain Formula Parser
//!
//! Grammar: a sequence of element symbols (`[A-Z][a-z]*`) and bracketed groups,
//! each followed by an optional decimal amount. Groups use `()` or `[]`, nest,
//! and multiply their contents. Whitespace between tokens is ignored.

use crate::element::Element;
use crate::error::ParseError;

pub(crate) fn parse_formula(formula: &str) -> Result<Vec<(Element, f64)>, ParseError> {
    let mut parser = FormulaParser {
        chars: formula.chars().collect(),
        pos: 0,
    };
    let pairs = parser.parse_group(None)?;
    if pairs.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(pairs)
}

struct FormulaParser {
    chars: Vec<char>,
    pos: usize,
}

impl FormulaParser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn parse_group(&mut self, closing: Option<char>) -> Result<Vec<(Element, f64)>, ParseError> {
        let start = self.pos;
        let mut pairs = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    if closing.is_some() {
                        return Err(ParseError::UnbalancedGroup(start.saturating_sub(1)));
                    }
                    return Ok(pairs);
                }
                Some(c) if Some(c) == closing => {
                    self.pos += 1;
                    return Ok(pairs);
                }
                Some(open @ ('(' | '[')) => {
                    self.pos += 1;
                    let close = if open == '(' { ')' } else { ']' };
                    let inner = self.parse_group(Some(close))?;
                    let multiplier = self.parse_amount()?;
                    for (element, amount) in inner {
                        accumulate(&mut pairs, element, amount * multiplier);
                    }
                }
                Some(')' | ']') => return Err(ParseError::UnbalancedGroup(self.pos)),
                Some(c) if c.is_ascii_uppercase() => {
                    let element = self.parse_symbol()?;
                    let amount = self.parse_amount()?;
                    accumulate(&mut pairs, element, amount);
                }
                Some(ch) => {
                    return Err(ParseError::UnexpectedCharacter {
                        ch,
                        position: self.pos,
                    })
                }
            }
        }
    }

    fn parse_symbol(&mut self) -> Result<Element, ParseError> {
        let start = self.pos;
        self.pos += 1;
        while self.peek().is_some_and(|c| c.is_ascii_lowercase()) {
            self.pos += 1;
        }
        let symbol: String = self.chars[start..self.pos].iter().collect();
        Ok(symbol.parse::<Element>()?)
    }

    /// Amount following a symbol or group; absent means 1
    fn parse_amount(&mut self) -> Result<f64, ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(1.0);
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        match text.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
            _ => Err(ParseError::InvalidAmount(text)),
        }
    }
}

fn accumulate(pairs: &mut Vec<(Element, f64)>, element: Element, amount: f64) {
    match pairs.iter_mut().find(|(el, _)| *el == element) {
        Some((_, existing)) => *existing += amount,
        None => pairs.push((element, amount)),
    }
}
