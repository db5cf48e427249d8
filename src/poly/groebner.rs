use tracing::{debug, instrument, trace};

use super::monomial::Term;
use super::polynomial::Polynomial;
use super::{check_nvars, PolynomialError, ZERO_THRESHOLD};

/// Check that all polynomials share the number of variables and the monomial order.
fn check_system<'a>(
    mut system: impl Iterator<Item = &'a Polynomial>,
) -> Result<(), PolynomialError> {
    let Some(first) = system.next() else {
        return Ok(());
    };

    for p in system {
        check_nvars(first.nvars(), p.nvars())?;
        if p.order() != first.order() {
            return Err(PolynomialError::OrderMismatch {
                expected: first.order(),
                found: p.order(),
            });
        }
    }

    Ok(())
}

/// The least common multiple of the monomials of `a` and `b`.
/// The coefficient of the result is the product of the coefficients.
pub fn lcm(a: &Term, b: &Term) -> Result<Term, PolynomialError> {
    check_nvars(a.nvars(), b.nvars())?;

    let mut res = a.clone();
    for (e1, e2) in res.exponents.iter_mut().zip(&b.exponents) {
        *e1 = (*e1).max(*e2);
    }
    res.coefficient *= b.coefficient;
    Ok(res)
}

/// Check if the monomial of `divisor` divides the monomial of `target`.
#[inline]
pub fn can_divide(divisor: &Term, target: &Term) -> Result<bool, PolynomialError> {
    divisor.divides(target)
}

/// Construct the S-polynomial of `p1` and `p2`. Each polynomial is multiplied
/// by the cofactor of its leading monomial in the lcm, scaled by the leading
/// coefficient of the other, so that the leading terms cancel.
pub fn s_polynomial(p1: &Polynomial, p2: &Polynomial) -> Result<Polynomial, PolynomialError> {
    check_system([p1, p2].into_iter())?;

    if p1.is_zero() || p2.is_zero() {
        return Ok(Polynomial::new(p1.nvars(), p1.order()));
    }

    let l1 = p1.leading_term()?;
    let l2 = p2.leading_term()?;
    let m = lcm(l1, l2)?;

    // the coefficient of m is lc(p1) * lc(p2)
    let m1 = m.div(l1)?;
    let m2 = m.div(l2)?;

    p1.mul_term(&m1)?.sub(&p2.mul_term(&m2)?)
}

/// Completely reduce the polynomial `candidate` w.r.t the polynomials `divisors`.
/// For example reducing `f=y^2+x` by `g=[x]` yields `y^2`.
///
/// The divisors are scanned in the given order and the first one whose
/// leading monomial divides the current leading monomial is used.
pub fn reduce(
    candidate: &Polynomial,
    divisors: &[Polynomial],
) -> Result<Polynomial, PolynomialError> {
    let divisors: Vec<_> = divisors.iter().collect();
    reduce_by(candidate, &divisors)
}

fn reduce_by(
    candidate: &Polynomial,
    divisors: &[&Polynomial],
) -> Result<Polynomial, PolynomialError> {
    check_system(std::iter::once(candidate).chain(divisors.iter().copied()))?;

    let mut remainder = Polynomial::new(candidate.nvars(), candidate.order());
    let mut r = candidate.clone();

    while !r.is_zero() {
        let head = r.leading_term()?;

        let mut quotient = None;
        for g in divisors.iter().filter(|g| !g.is_zero()) {
            let lt = g.leading_term()?;
            if can_divide(lt, head)? {
                quotient = Some((*g, head.div(lt)?));
                break;
            }
        }

        match quotient {
            Some((g, q)) => {
                trace!("reducing leading term {:?} by {}", head.exponents, g);
                r = r.sub(&g.mul_term(&q)?)?;
            }
            None => {
                // strip leading monomial that is not reducible
                if let Some(t) = r.remove_term(0) {
                    remainder.add_term(t)?;
                }
            }
        }
    }

    Ok(remainder)
}

/// Remove every polynomial whose leading monomial is divisible by the leading
/// monomial of another. Of several polynomials with the same leading monomial,
/// only the first is kept. Zero polynomials are dropped.
pub fn minimize_basis(basis: &[Polynomial]) -> Result<Vec<Polynomial>, PolynomialError> {
    check_system(basis.iter())?;

    let mut minimal = vec![];
    'outer: for (i, p1) in basis.iter().enumerate() {
        if p1.is_zero() {
            continue;
        }
        let lm1 = p1.leading_term()?;

        for (j, p2) in basis.iter().enumerate() {
            if i == j || p2.is_zero() {
                continue;
            }

            let lm2 = p2.leading_term()?;
            if can_divide(lm2, lm1)? && (!lm2.same_monomial(lm1) || j < i) {
                continue 'outer;
            }
        }

        minimal.push(p1.clone());
    }

    Ok(minimal)
}

/// Replace every polynomial by its normal form w.r.t. the other polynomials.
pub fn clean_basis(basis: &[Polynomial]) -> Result<Vec<Polynomial>, PolynomialError> {
    let mut cleaned = Vec::with_capacity(basis.len());
    for (i, p) in basis.iter().enumerate() {
        let others: Vec<_> = basis
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, g)| g)
            .collect();

        cleaned.push(reduce_by(p, &others)?);
    }

    Ok(cleaned)
}

/// Complete `ideal` to a Gröbner basis with Buchberger's algorithm.
/// The result is neither minimal nor reduced.
pub fn complete(ideal: &[Polynomial]) -> Result<Vec<Polynomial>, PolynomialError> {
    buchberger(ideal, false)
}

fn buchberger(ideal: &[Polynomial], print_stats: bool) -> Result<Vec<Polynomial>, PolynomialError> {
    check_system(ideal.iter())?;

    let mut basis: Vec<Polynomial> = ideal.iter().filter(|p| !p.is_zero()).cloned().collect();

    let mut pairs: Vec<(usize, usize)> = (0..basis.len())
        .flat_map(|i| (i + 1..basis.len()).map(move |j| (i, j)))
        .collect();

    let mut iter_count = 1;
    while let Some((i, j)) = pairs.pop() {
        if print_stats {
            println!(
                "Iteration {}:\n\tPair=({}, {}), Basis length={}, Critical pairs={}",
                iter_count,
                i,
                j,
                basis.len(),
                pairs.len() + 1,
            );
        }
        iter_count += 1;

        let s = s_polynomial(&basis[i], &basis[j])?;
        let mut h = reduce(&s, &basis)?;

        if h.is_zero() {
            trace!("S-polynomial of ({}, {}) reduces to zero", i, j);
            continue;
        }

        let lc = h.leading_term()?.coefficient;
        if lc.abs() > ZERO_THRESHOLD {
            h = h.div_coeff(lc)?;
        }

        debug!("New basis element from ({}, {}): {}", i, j, h);

        basis.push(h);
        let k = basis.len() - 1;
        pairs.extend((0..k).map(|i| (i, k)));
    }

    debug!(
        "Completed basis with {} elements after {} pairs",
        basis.len(),
        iter_count - 1
    );

    Ok(basis)
}

/// Compute the reduced Gröbner basis of `ideal`.
#[instrument(level = "debug", skip_all, fields(generators = ideal.len()))]
pub fn solve(ideal: &[Polynomial]) -> Result<Vec<Polynomial>, PolynomialError> {
    solve_with_stats(ideal, false)
}

fn solve_with_stats(
    ideal: &[Polynomial],
    print_stats: bool,
) -> Result<Vec<Polynomial>, PolynomialError> {
    let basis = buchberger(ideal, print_stats)?;
    let basis = minimize_basis(&basis)?;
    debug!("Minimal basis has {} elements", basis.len());
    clean_basis(&basis)
}

/// A reduced Gröbner basis of a polynomial ideal.
#[derive(Debug, Clone)]
pub struct GroebnerBasis {
    pub system: Vec<Polynomial>,
    pub print_stats: bool,
}

impl GroebnerBasis {
    /// Construct a Groebner basis for a polynomial ideal.
    ///
    /// Progress can be monitored with `print_stats`.
    pub fn new(ideal: &[Polynomial], print_stats: bool) -> Result<GroebnerBasis, PolynomialError> {
        let system = solve_with_stats(ideal, print_stats)?;

        if print_stats {
            println!("Reduced basis length={}", system.len());
        }

        Ok(GroebnerBasis {
            system,
            print_stats,
        })
    }

    /// Compute the normal form of `p` w.r.t the basis.
    pub fn reduce(&self, p: &Polynomial) -> Result<Polynomial, PolynomialError> {
        reduce(p, &self.system)
    }

    /// Check if `p` is a member of the ideal.
    pub fn contains(&self, p: &Polynomial) -> Result<bool, PolynomialError> {
        Ok(self.reduce(p)?.is_zero())
    }

    /// Check if the ideal is the whole ring, in which case the polynomials
    /// have no common root.
    pub fn is_trivial(&self) -> bool {
        self.system.len() == 1 && !self.system[0].is_zero() && self.system[0].is_constant()
    }

    pub fn to_polynomials(&self) -> Vec<Polynomial> {
        self.system.clone()
    }

    /// Check if every S-polynomial of `system` reduces to zero.
    pub fn is_groebner_basis(system: &[Polynomial]) -> Result<bool, PolynomialError> {
        for (i, p1) in system.iter().enumerate() {
            for p2 in &system[i + 1..] {
                let s = s_polynomial(p1, p2)?;
                if !reduce(&s, system)?.is_zero() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
