pub mod groebner;
pub mod monomial;
pub mod polynomial;

use std::cmp::Ordering::{self, Equal};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use self::monomial::Term;

/// The number of exponents that are stored inline before a term allocates.
pub const INLINED_EXPONENTS: usize = 6;

/// Coefficients with a magnitude at or below this value are treated as zero
/// by the operations that prune.
pub const ZERO_THRESHOLD: f64 = 1e-9;

/// A total order on monomials of a fixed number of variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonomialOrder {
    /// Lexicographic ordering of monomials.
    Lex,
    /// Total degree first, ties broken lexicographically.
    GradedLex,
    /// Graded reverse lexicographic ordering of monomials.
    #[default]
    GRevLex,
}

impl MonomialOrder {
    /// Compare two exponent vectors of equal length.
    #[inline]
    pub fn cmp(&self, a: &[u32], b: &[u32]) -> Ordering {
        debug_assert_eq!(a.len(), b.len());

        match self {
            MonomialOrder::Lex => a.cmp(b),
            MonomialOrder::GradedLex => {
                let deg: u64 = a.iter().map(|e| *e as u64).sum();
                let deg2: u64 = b.iter().map(|e| *e as u64).sum();

                deg.cmp(&deg2).then_with(|| a.cmp(b))
            }
            MonomialOrder::GRevLex => {
                let deg: u64 = a.iter().map(|e| *e as u64).sum();
                let deg2: u64 = b.iter().map(|e| *e as u64).sum();

                match deg.cmp(&deg2) {
                    Equal => {}
                    x => {
                        return x;
                    }
                }

                for (a1, a2) in a.iter().rev().zip(b.iter().rev()) {
                    match a1.cmp(a2) {
                        Equal => {}
                        x => {
                            return x.reverse();
                        }
                    }
                }

                Equal
            }
        }
    }

    /// Returns `true` iff the monomial of `a` is strictly greater than that of `b`.
    #[inline]
    pub fn is_greater(&self, a: &Term, b: &Term) -> bool {
        self.cmp(&a.exponents, &b.exponents).is_gt()
    }
}

impl Display for MonomialOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MonomialOrder::Lex => f.write_str("lex"),
            MonomialOrder::GradedLex => f.write_str("grlex"),
            MonomialOrder::GRevLex => f.write_str("grevlex"),
        }
    }
}

impl FromStr for MonomialOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lex" => Ok(MonomialOrder::Lex),
            "grlex" | "gradedlex" | "deglex" => Ok(MonomialOrder::GradedLex),
            "grevlex" | "degrevlex" => Ok(MonomialOrder::GRevLex),
            _ => Err(format!("Unknown monomial order '{}'", s)),
        }
    }
}

/// Errors that can occur when combining terms and polynomials.
#[derive(Debug, Clone, PartialEq)]
pub enum PolynomialError {
    DimensionMismatch { expected: usize, found: usize },
    OrderMismatch {
        expected: MonomialOrder,
        found: MonomialOrder,
    },
    DivisionByZeroCoefficient,
    IndivisibleMonomial,
    ExponentOverflow,
    EmptyLeadingTermAccess,
}

impl Display for PolynomialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PolynomialError::DimensionMismatch { expected, found } => write!(
                f,
                "Exponent vectors have different lengths: expected {}, found {}",
                expected, found
            ),
            PolynomialError::OrderMismatch { expected, found } => write!(
                f,
                "Polynomials use different monomial orders: expected {}, found {}",
                expected, found
            ),
            PolynomialError::DivisionByZeroCoefficient => {
                write!(f, "Division by a zero coefficient")
            }
            PolynomialError::IndivisibleMonomial => {
                write!(f, "Cannot divide monomials with exponents smaller than the divisor")
            }
            PolynomialError::ExponentOverflow => {
                write!(f, "Exponent does not fit in {} bits", u32::BITS)
            }
            PolynomialError::EmptyLeadingTermAccess => {
                write!(f, "The zero polynomial has no leading term")
            }
        }
    }
}

impl std::error::Error for PolynomialError {}

#[inline]
pub(crate) fn check_nvars(expected: usize, found: usize) -> Result<(), PolynomialError> {
    if expected != found {
        Err(PolynomialError::DimensionMismatch { expected, found })
    } else {
        Ok(())
    }
}
