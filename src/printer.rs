use std::fmt::{self, Write};

use smartstring::{LazyCompact, SmartString};

use crate::poly::polynomial::Polynomial;

/// Various options for printing polynomials.
#[derive(Debug, Copy, Clone)]
pub struct PrintOptions {
    /// The character between the coefficient and the variables.
    /// `None` writes them next to each other.
    pub multiplication_operator: Option<char>,
    pub double_star_for_exponentiation: bool,
    pub terms_on_new_line: bool,
    /// The number of digits after the decimal point of a coefficient.
    pub precision: Option<usize>,
}

impl PrintOptions {
    pub const fn new() -> Self {
        Self {
            multiplication_operator: None,
            double_star_for_exponentiation: false,
            terms_on_new_line: false,
            precision: None,
        }
    }

    /// Print every multiplication with an explicit `*`.
    pub const fn explicit() -> Self {
        Self {
            multiplication_operator: Some('*'),
            double_star_for_exponentiation: false,
            terms_on_new_line: false,
            precision: None,
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The variable names used when none are given: `x, y, z` for up to three
/// variables and `x0, x1, ...` otherwise.
pub fn default_var_names(nvars: usize) -> Vec<SmartString<LazyCompact>> {
    if nvars <= 3 {
        ["x", "y", "z"][..nvars]
            .iter()
            .map(|&v| v.into())
            .collect()
    } else {
        (0..nvars).map(|i| format!("x{}", i).into()).collect()
    }
}

pub struct PolynomialPrinter<'a, 'b> {
    pub poly: &'a Polynomial,
    pub var_names: Option<&'b [SmartString<LazyCompact>]>,
    pub opts: PrintOptions,
}

impl<'a, 'b> PolynomialPrinter<'a, 'b> {
    pub fn new(poly: &'a Polynomial) -> PolynomialPrinter<'a, 'b> {
        PolynomialPrinter {
            poly,
            var_names: None,
            opts: PrintOptions::new(),
        }
    }

    pub fn new_with_options(
        poly: &'a Polynomial,
        var_names: &'b [SmartString<LazyCompact>],
        opts: PrintOptions,
    ) -> PolynomialPrinter<'a, 'b> {
        PolynomialPrinter {
            poly,
            var_names: Some(var_names),
            opts,
        }
    }

    fn fmt_coefficient(&self, c: f64, f: &mut fmt::Formatter) -> fmt::Result {
        match self.opts.precision {
            Some(p) => write!(f, "{:.*}", p, c),
            None => write!(f, "{}", c),
        }
    }
}

impl<'a, 'b> fmt::Display for PolynomialPrinter<'a, 'b> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_char('0');
        }

        let defaults;
        let var_names = match self.var_names {
            Some(v) if v.len() >= self.poly.nvars() => v,
            _ => {
                defaults = default_var_names(self.poly.nvars());
                &defaults[..]
            }
        };

        for (i, t) in self.poly.terms().iter().enumerate() {
            if i > 0 {
                if self.opts.terms_on_new_line {
                    f.write_char('\n')?;
                } else {
                    f.write_char(' ')?;
                }

                if t.coefficient < 0. {
                    f.write_str("- ")?;
                } else {
                    f.write_str("+ ")?;
                }
            } else if t.coefficient < 0. {
                f.write_char('-')?;
            }

            self.fmt_coefficient(t.coefficient.abs(), f)?;

            for (e, name) in t.exponents.iter().zip(var_names) {
                if *e == 0 {
                    continue;
                }

                if let Some(c) = self.opts.multiplication_operator {
                    f.write_char(c)?;
                }
                f.write_str(name)?;

                if *e > 1 {
                    if self.opts.double_star_for_exponentiation {
                        f.write_str("**")?;
                    } else {
                        f.write_char('^')?;
                    }
                    write!(f, "{}", e)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::{monomial::Term, MonomialOrder};

    fn circle() -> Polynomial {
        Polynomial::from_terms(
            2,
            MonomialOrder::GRevLex,
            vec![
                Term::new(1., &[2, 0]),
                Term::new(1., &[0, 2]),
                Term::new(-1., &[0, 0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn default_format() {
        assert_eq!(circle().to_string(), "1x^2 + 1y^2 - 1");
        assert_eq!(Polynomial::new(2, MonomialOrder::Lex).to_string(), "0");

        let p = Polynomial::from_terms(
            3,
            MonomialOrder::GRevLex,
            vec![Term::new(-0.5, &[1, 1, 1]), Term::new(2., &[0, 0, 1])],
        )
        .unwrap();
        assert_eq!(p.to_string(), "-0.5xyz + 2z");
    }

    #[test]
    fn options() {
        let names: Vec<SmartString<LazyCompact>> = vec!["a".into(), "b".into()];
        let p = circle();

        let mut opts = PrintOptions::explicit();
        opts.double_star_for_exponentiation = true;
        assert_eq!(
            PolynomialPrinter::new_with_options(&p, &names, opts).to_string(),
            "1*a**2 + 1*b**2 - 1"
        );

        let mut opts = PrintOptions::new();
        opts.precision = Some(2);
        opts.terms_on_new_line = true;
        assert_eq!(
            PolynomialPrinter::new_with_options(&p, &names, opts).to_string(),
            "1.00a^2\n+ 1.00b^2\n- 1.00"
        );
    }

    #[test]
    fn var_names() {
        let names = |n| {
            default_var_names(n)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(2), vec!["x", "y"]);
        assert_eq!(names(4), vec!["x0", "x1", "x2", "x3"]);
    }
}
