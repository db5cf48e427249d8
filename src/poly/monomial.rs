use smallvec::SmallVec;

use super::{check_nvars, PolynomialError, INLINED_EXPONENTS};

/// A monomial with a real coefficient.
///
/// Equality compares both the exponents and the coefficient exactly. Use
/// [`Term::same_monomial`] to compare only the exponents.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponents: SmallVec<[u32; INLINED_EXPONENTS]>,
}

impl Term {
    #[inline]
    pub fn new(coefficient: f64, exponents: &[u32]) -> Term {
        Term {
            coefficient,
            exponents: SmallVec::from_slice(exponents),
        }
    }

    /// A term without variables.
    #[inline]
    pub fn constant(coefficient: f64, nvars: usize) -> Term {
        Term {
            coefficient,
            exponents: SmallVec::from_elem(0, nvars),
        }
    }

    #[inline]
    pub fn nvars(&self) -> usize {
        self.exponents.len()
    }

    #[inline]
    pub fn total_degree(&self) -> u64 {
        self.exponents.iter().map(|e| *e as u64).sum()
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.exponents.iter().all(|e| *e == 0)
    }

    #[inline]
    pub fn same_monomial(&self, other: &Term) -> bool {
        self.exponents == other.exponents
    }

    /// Multiply the coefficient by `c`.
    #[inline]
    pub fn scale(&self, c: f64) -> Term {
        Term {
            coefficient: self.coefficient * c,
            exponents: self.exponents.clone(),
        }
    }

    #[inline]
    pub fn neg(&self) -> Term {
        self.scale(-1.)
    }

    pub fn mul(&self, other: &Term) -> Result<Term, PolynomialError> {
        check_nvars(self.nvars(), other.nvars())?;

        let mut res = self.clone();
        for (ee, er) in res.exponents.iter_mut().zip(&other.exponents) {
            *ee = ee
                .checked_add(*er)
                .ok_or(PolynomialError::ExponentOverflow)?;
        }
        res.coefficient *= other.coefficient;
        Ok(res)
    }

    /// Divide by a term whose monomial divides the monomial of `self`.
    pub fn div(&self, other: &Term) -> Result<Term, PolynomialError> {
        check_nvars(self.nvars(), other.nvars())?;

        if other.coefficient == 0. {
            return Err(PolynomialError::DivisionByZeroCoefficient);
        }

        let mut res = self.clone();
        for (ee, er) in res.exponents.iter_mut().zip(&other.exponents) {
            if *ee < *er {
                return Err(PolynomialError::IndivisibleMonomial);
            }
            *ee -= *er;
        }
        res.coefficient /= other.coefficient;
        Ok(res)
    }

    pub fn div_coeff(&self, c: f64) -> Result<Term, PolynomialError> {
        if c == 0. {
            return Err(PolynomialError::DivisionByZeroCoefficient);
        }

        Ok(Term {
            coefficient: self.coefficient / c,
            exponents: self.exponents.clone(),
        })
    }

    /// Check if the monomial of `self` divides the monomial of `other`.
    /// Coefficients are ignored.
    pub fn divides(&self, other: &Term) -> Result<bool, PolynomialError> {
        check_nvars(self.nvars(), other.nvars())?;

        Ok(self
            .exponents
            .iter()
            .zip(&other.exponents)
            .all(|(a, b)| a <= b))
    }

    /// Evaluate the term at `point`.
    pub fn evaluate(&self, point: &[f64]) -> Result<f64, PolynomialError> {
        check_nvars(self.nvars(), point.len())?;

        Ok(self
            .exponents
            .iter()
            .zip(point)
            .fold(self.coefficient, |acc, (e, x)| match i32::try_from(*e) {
                Ok(e) => acc * x.powi(e),
                Err(_) => acc * x.powf(*e as f64),
            }))
    }
}
