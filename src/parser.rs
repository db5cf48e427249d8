use ahash::HashMap;
use smartstring::{LazyCompact, SmartString};

use crate::poly::{polynomial::Polynomial, MonomialOrder};

/// Parse a polynomial in the variables `var_names`, such as `x^2 + 3.5*x*y - 1`.
///
/// Factors may be separated by `*` or written next to each other (`2xy^2`).
/// An exponent is written with `^` or `**`. Terms with the same monomial are merged.
pub fn parse_polynomial(
    input: &str,
    var_names: &[SmartString<LazyCompact>],
    order: MonomialOrder,
) -> Result<Polynomial, String> {
    let mut var_map: HashMap<&str, usize> = HashMap::default();
    for (i, v) in var_names.iter().enumerate() {
        if v.is_empty() || var_map.insert(v.as_str(), i).is_some() {
            return Err(format!("Invalid or duplicate variable name '{}'", v));
        }
    }

    let mut parser = PolynomialParser {
        input: input.as_bytes(),
        pos: 0,
        nvars: var_names.len(),
        max_name_len: var_names.iter().map(|v| v.len()).max().unwrap_or(0),
        var_map,
    };

    parser.parse(order)
}

struct PolynomialParser<'a, 'b> {
    input: &'a [u8],
    pos: usize,
    nvars: usize,
    max_name_len: usize,
    var_map: HashMap<&'b str, usize>,
}

impl<'a, 'b> PolynomialParser<'a, 'b> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn parse(&mut self, order: MonomialOrder) -> Result<Polynomial, String> {
        let mut poly = Polynomial::new(self.nvars, order);

        self.skip_whitespace();
        if self.peek().is_none() {
            return Err("Empty input".to_owned());
        }

        let mut first = true;
        loop {
            self.skip_whitespace();

            let sign = match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    1.
                }
                Some(b'-') => {
                    self.pos += 1;
                    -1.
                }
                _ if first => 1.,
                _ => {
                    return Err(format!("Expected '+' or '-' at position {}", self.pos));
                }
            };
            first = false;

            self.skip_whitespace();
            let (coeff, exponents) = self.parse_term()?;
            poly.append_monomial(sign * coeff, &exponents)
                .map_err(|e| e.to_string())?;

            self.skip_whitespace();
            if self.peek().is_none() {
                break;
            }
        }

        Ok(poly)
    }

    fn parse_term(&mut self) -> Result<(f64, Vec<u32>), String> {
        let mut exponents: Vec<u32> = vec![0; self.nvars];
        let mut coeff = 1.;
        let mut has_number = false;
        let mut has_factor = false;

        if self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == b'.')
        {
            coeff = self.parse_number()?;
            has_number = true;
        }

        loop {
            self.skip_whitespace();

            let mut star = false;
            if self.peek() == Some(b'*') && (has_number || has_factor) {
                self.pos += 1;
                star = true;
                self.skip_whitespace();
            }

            match self.peek() {
                Some(c) if c.is_ascii_alphabetic() || c == b'_' => {}
                _ if star => {
                    return Err(format!("Expected a variable at position {}", self.pos));
                }
                _ => break,
            }

            let vars = self.parse_identifier()?;

            self.skip_whitespace();
            let pow = if self.peek() == Some(b'^') {
                self.pos += 1;
                self.parse_exponent()?
            } else if self.input[self.pos..].starts_with(b"**") {
                self.pos += 2;
                self.parse_exponent()?
            } else {
                1
            };

            let (last, rest) = vars.split_last().ok_or("Empty identifier")?;
            for (v, e) in rest.iter().map(|v| (*v, 1)).chain([(*last, pow)]) {
                exponents[v] = exponents[v]
                    .checked_add(e)
                    .ok_or_else(|| format!("Exponent overflow at position {}", self.pos))?;
            }

            has_factor = true;
        }

        if !has_number && !has_factor {
            return Err(format!("Expected a term at position {}", self.pos));
        }

        Ok((coeff, exponents))
    }

    fn parse_number(&mut self) -> Result<f64, String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == b'.')
        {
            self.pos += 1;
        }

        let s = std::str::from_utf8(&self.input[start..self.pos]).map_err(|e| e.to_string())?;
        s.parse::<f64>()
            .map_err(|_| format!("Invalid number '{}' at position {}", s, start))
    }

    fn parse_exponent(&mut self) -> Result<u32, String> {
        self.skip_whitespace();

        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }

        if start == self.pos {
            return Err(format!("Expected an exponent at position {}", start));
        }

        let s = std::str::from_utf8(&self.input[start..self.pos]).map_err(|e| e.to_string())?;
        s.parse::<u32>()
            .map_err(|_| format!("Exponent '{}' at position {} is too large", s, start))
    }

    /// Read an identifier and return the variables it consists of. An identifier
    /// that is not a variable itself is split greedily into the longest
    /// variable names, so that `xy` is read as `x*y`.
    fn parse_identifier(&mut self) -> Result<Vec<usize>, String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.pos += 1;
        }

        let ident = std::str::from_utf8(&self.input[start..self.pos]).map_err(|e| e.to_string())?;

        if let Some(v) = self.var_map.get(ident) {
            return Ok(vec![*v]);
        }

        let mut vars = vec![];
        let mut rest = ident;
        'split: while !rest.is_empty() {
            for len in (1..=self.max_name_len.min(rest.len())).rev() {
                if !rest.is_char_boundary(len) {
                    continue;
                }

                if let Some(v) = self.var_map.get(&rest[..len]) {
                    vars.push(*v);
                    rest = &rest[len..];
                    continue 'split;
                }
            }

            return Err(format!(
                "Unknown variable '{}' at position {}",
                ident, start
            ));
        }

        Ok(vars)
    }
}
