use std::cmp::Ordering;
use std::fmt::Display;

use crate::printer::PolynomialPrinter;

use super::monomial::Term;
use super::{check_nvars, MonomialOrder, PolynomialError, ZERO_THRESHOLD};

/// Multivariate polynomial with real coefficients.
///
/// The terms are stored in descending order with respect to the monomial
/// order of the polynomial, so that the leading term is always at index 0.
/// An empty list of terms is the zero polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
    nvars: usize,
    order: MonomialOrder,
}

impl Polynomial {
    /// Constructs a zero polynomial.
    #[inline]
    pub fn new(nvars: usize, order: MonomialOrder) -> Polynomial {
        Polynomial {
            terms: vec![],
            nvars,
            order,
        }
    }

    /// Constructs a polynomial from a list of terms. The terms are sorted,
    /// but terms with equal monomials are not merged.
    pub fn from_terms(
        nvars: usize,
        order: MonomialOrder,
        terms: Vec<Term>,
    ) -> Result<Polynomial, PolynomialError> {
        for t in &terms {
            check_nvars(nvars, t.nvars())?;
        }

        let mut p = Polynomial {
            terms,
            nvars,
            order,
        };
        p.sort_terms();
        Ok(p)
    }

    /// Constructs a constant polynomial. A zero coefficient yields the zero polynomial.
    pub fn constant(coefficient: f64, nvars: usize, order: MonomialOrder) -> Polynomial {
        let mut p = Polynomial::new(nvars, order);
        if coefficient != 0. {
            p.terms.push(Term::constant(coefficient, nvars));
        }
        p
    }

    #[inline]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    #[inline]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|t| t.is_constant())
    }

    /// The maximal total degree of the terms.
    pub fn degree(&self) -> Option<u64> {
        self.terms.iter().map(|t| t.total_degree()).max()
    }

    /// Get the greatest term with respect to the monomial order.
    #[inline]
    pub fn leading_term(&self) -> Result<&Term, PolynomialError> {
        self.terms
            .first()
            .ok_or(PolynomialError::EmptyLeadingTermAccess)
    }

    fn sort_terms(&mut self) {
        let order = self.order;
        self.terms
            .sort_by(|a, b| order.cmp(&b.exponents, &a.exponents));
    }

    fn check_compatible(&self, other: &Polynomial) -> Result<(), PolynomialError> {
        check_nvars(self.nvars, other.nvars)?;
        if self.order != other.order {
            return Err(PolynomialError::OrderMismatch {
                expected: self.order,
                found: other.order,
            });
        }
        Ok(())
    }

    /// Insert a term at its sorted position. Terms with an equal monomial are
    /// not merged: the new term is placed after them.
    pub fn add_term(&mut self, term: Term) -> Result<(), PolynomialError> {
        check_nvars(self.nvars, term.nvars())?;

        let order = self.order;
        let pos = self
            .terms
            .partition_point(|t| order.cmp(&t.exponents, &term.exponents) != Ordering::Less);
        self.terms.insert(pos, term);
        Ok(())
    }

    /// Remove the term at `index`. Returns `None` if the index is out of bounds.
    pub fn remove_term(&mut self, index: usize) -> Option<Term> {
        if index < self.terms.len() {
            Some(self.terms.remove(index))
        } else {
            None
        }
    }

    /// Appends a monomial to the polynomial. If the polynomial already has
    /// a term with the same monomial, the coefficients are added and the term
    /// is removed when the sum is zero.
    pub fn append_monomial(
        &mut self,
        coefficient: f64,
        exponents: &[u32],
    ) -> Result<(), PolynomialError> {
        check_nvars(self.nvars, exponents.len())?;

        if coefficient == 0. {
            return Ok(());
        }

        let order = self.order;
        match self
            .terms
            .binary_search_by(|t| order.cmp(exponents, &t.exponents))
        {
            Ok(i) => {
                self.terms[i].coefficient += coefficient;
                if self.terms[i].coefficient == 0. {
                    self.terms.remove(i);
                }
            }
            Err(i) => self.terms.insert(i, Term::new(coefficient, exponents)),
        }

        Ok(())
    }

    /// Add two polynomials by merging their terms. Coefficients of equal
    /// monomials are summed and the sum is kept, even if it vanishes.
    pub fn add(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_compatible(other)?;

        let mut terms = Vec::with_capacity(self.nterms() + other.nterms());
        let mut i = 0;
        let mut j = 0;

        while i < self.nterms() && j < other.nterms() {
            let (a, b) = (&self.terms[i], &other.terms[j]);
            match self.order.cmp(&a.exponents, &b.exponents) {
                Ordering::Greater => {
                    terms.push(a.clone());
                    i += 1;
                }
                Ordering::Less => {
                    terms.push(b.clone());
                    j += 1;
                }
                Ordering::Equal => {
                    terms.push(Term {
                        coefficient: a.coefficient + b.coefficient,
                        exponents: a.exponents.clone(),
                    });
                    i += 1;
                    j += 1;
                }
            }
        }

        terms.extend_from_slice(&self.terms[i..]);
        terms.extend_from_slice(&other.terms[j..]);

        Ok(Polynomial {
            terms,
            nvars: self.nvars,
            order: self.order,
        })
    }

    /// Subtract `other` from `self` by merging their terms. A difference of
    /// coefficients of equal monomials is only kept if its magnitude exceeds
    /// [`ZERO_THRESHOLD`].
    pub fn sub(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_compatible(other)?;

        let mut terms = Vec::with_capacity(self.nterms() + other.nterms());
        let mut i = 0;
        let mut j = 0;

        while i < self.nterms() && j < other.nterms() {
            let (a, b) = (&self.terms[i], &other.terms[j]);
            match self.order.cmp(&a.exponents, &b.exponents) {
                Ordering::Greater => {
                    terms.push(a.clone());
                    i += 1;
                }
                Ordering::Less => {
                    terms.push(b.neg());
                    j += 1;
                }
                Ordering::Equal => {
                    let diff = a.coefficient - b.coefficient;
                    if diff.abs() > ZERO_THRESHOLD {
                        terms.push(Term {
                            coefficient: diff,
                            exponents: a.exponents.clone(),
                        });
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        terms.extend_from_slice(&self.terms[i..]);
        terms.extend(other.terms[j..].iter().map(|t| t.neg()));

        Ok(Polynomial {
            terms,
            nvars: self.nvars,
            order: self.order,
        })
    }

    /// Multiply every term by `term`.
    pub fn mul_term(&self, term: &Term) -> Result<Polynomial, PolynomialError> {
        check_nvars(self.nvars, term.nvars())?;

        let terms = self
            .terms
            .iter()
            .map(|t| t.mul(term))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Polynomial {
            terms,
            nvars: self.nvars,
            order: self.order,
        })
    }

    /// Multiply every coefficient by `coeff`.
    pub fn mul_coeff(&self, coeff: f64) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|t| t.scale(coeff)).collect(),
            nvars: self.nvars,
            order: self.order,
        }
    }

    /// Divide every coefficient by `coeff`.
    pub fn div_coeff(&self, coeff: f64) -> Result<Polynomial, PolynomialError> {
        let terms = self
            .terms
            .iter()
            .map(|t| t.div_coeff(coeff))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Polynomial {
            terms,
            nvars: self.nvars,
            order: self.order,
        })
    }

    /// Divide by the leading coefficient.
    pub fn make_monic(&self) -> Result<Polynomial, PolynomialError> {
        let lc = self.leading_term()?.coefficient;
        self.div_coeff(lc)
    }

    /// Multiply two polynomials. Products with equal monomials are collected
    /// and terms whose coefficient magnitude is at most [`ZERO_THRESHOLD`] are dropped.
    pub fn mul(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_compatible(other)?;

        let mut raw_terms = Vec::with_capacity(self.nterms() * other.nterms());
        for t1 in &self.terms {
            for t2 in &other.terms {
                raw_terms.push(t1.mul(t2)?);
            }
        }

        let order = self.order;
        raw_terms.sort_by(|a, b| order.cmp(&b.exponents, &a.exponents));

        let mut terms: Vec<Term> = Vec::with_capacity(raw_terms.len());
        let mut raw_terms = raw_terms.into_iter();
        if let Some(mut current) = raw_terms.next() {
            for next in raw_terms {
                if current.same_monomial(&next) {
                    current.coefficient += next.coefficient;
                } else {
                    if current.coefficient.abs() > ZERO_THRESHOLD {
                        terms.push(current);
                    }
                    current = next;
                }
            }

            if current.coefficient.abs() > ZERO_THRESHOLD {
                terms.push(current);
            }
        }

        Ok(Polynomial {
            terms,
            nvars: self.nvars,
            order: self.order,
        })
    }

    /// Evaluate the polynomial at `point`.
    pub fn evaluate(&self, point: &[f64]) -> Result<f64, PolynomialError> {
        check_nvars(self.nvars, point.len())?;

        let mut sum = 0.;
        for t in &self.terms {
            sum += t.evaluate(point)?;
        }
        Ok(sum)
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        PolynomialPrinter::new(self).fmt(f)
    }
}
