use buchberger::poly::{
    groebner::{reduce, solve, GroebnerBasis},
    monomial::Term,
    polynomial::Polynomial,
    MonomialOrder, PolynomialError,
};

fn poly(order: MonomialOrder, terms: &[(f64, &[u32])]) -> Polynomial {
    Polynomial::from_terms(
        terms[0].1.len(),
        order,
        terms.iter().map(|(c, e)| Term::new(*c, e)).collect(),
    )
    .unwrap()
}

fn two_circles(order: MonomialOrder) -> Vec<Polynomial> {
    vec![
        poly(order, &[(1., &[2, 0]), (1., &[0, 2]), (-1., &[0, 0])]),
        poly(order, &[(1., &[2, 0]), (1., &[0, 2]), (-4., &[0, 1])]),
    ]
}

fn parallel_lines(order: MonomialOrder) -> Vec<Polynomial> {
    vec![
        poly(order, &[(1., &[1, 0]), (1., &[0, 1]), (-1., &[0, 0])]),
        poly(order, &[(1., &[1, 0]), (1., &[0, 1]), (-3., &[0, 0])]),
    ]
}

fn twisted_cubic(order: MonomialOrder) -> Vec<Polynomial> {
    vec![
        poly(order, &[(1., &[0, 1, 0]), (-1., &[2, 0, 0])]),
        poly(order, &[(1., &[0, 0, 1]), (-1., &[1, 1, 0])]),
    ]
}

fn cyclic3(order: MonomialOrder) -> Vec<Polynomial> {
    vec![
        poly(order, &[(1., &[1, 0, 0]), (1., &[0, 1, 0]), (1., &[0, 0, 1])]),
        poly(order, &[(1., &[1, 1, 0]), (1., &[1, 0, 1]), (1., &[0, 1, 1])]),
        poly(order, &[(1., &[1, 1, 1]), (-1., &[0, 0, 0])]),
    ]
}

fn leading_monomials(basis: &[Polynomial]) -> Vec<Vec<u32>> {
    let mut lms: Vec<_> = basis
        .iter()
        .map(|p| p.leading_term().unwrap().exponents.to_vec())
        .collect();
    lms.sort();
    lms
}

const ORDERS: [MonomialOrder; 3] = [
    MonomialOrder::Lex,
    MonomialOrder::GradedLex,
    MonomialOrder::GRevLex,
];

#[test]
fn parallel_lines_have_no_solution() {
    let basis = solve(&parallel_lines(MonomialOrder::GRevLex)).unwrap();
    assert_eq!(
        basis,
        vec![Polynomial::constant(1., 2, MonomialOrder::GRevLex)]
    );

    let gb = GroebnerBasis::new(&parallel_lines(MonomialOrder::GRevLex), false).unwrap();
    assert!(gb.is_trivial());
    assert_eq!(gb.system[0].to_string(), "1");
}

#[test]
fn solve_two_circles() {
    let ideal = two_circles(MonomialOrder::GRevLex);
    let basis = solve(&ideal).unwrap();

    assert_eq!(leading_monomials(&basis), vec![vec![0, 1], vec![2, 0]]);

    // a generator in y alone
    assert!(basis
        .iter()
        .any(|p| !p.is_constant() && p.terms().iter().all(|t| t.exponents[0] == 0)));

    let x = 0.9375f64.sqrt();
    for root in [[x, 0.25], [-x, 0.25]] {
        for p in ideal.iter().chain(&basis) {
            assert!(p.evaluate(&root).unwrap().abs() < 1e-6, "{} at {:?}", p, root);
        }
    }
}

#[test]
fn solve_twisted_cubic() {
    let basis = solve(&twisted_cubic(MonomialOrder::GRevLex)).unwrap();
    assert_eq!(basis.len(), 3);
    // x^2 - y, xy - z and y^2 - xz up to sign
    assert_eq!(
        leading_monomials(&basis),
        vec![vec![0, 2, 0], vec![1, 1, 0], vec![2, 0, 0]]
    );

    // every point (t, t^2, t^3) is a root
    for t in [-2., 0.5, 3.] {
        for p in &basis {
            assert!(p.evaluate(&[t, t * t, t * t * t]).unwrap().abs() < 1e-9);
        }
    }
}

#[test]
fn cyclic3_contains_z3_minus_1() {
    let basis = solve(&cyclic3(MonomialOrder::GRevLex)).unwrap();

    let z = basis
        .iter()
        .find(|p| {
            !p.is_constant()
                && p
                    .terms()
                    .iter()
                    .all(|t| t.exponents[0] == 0 && t.exponents[1] == 0)
        })
        .expect("no generator in z alone");

    let z = z.make_monic().unwrap();
    assert_eq!(z.nterms(), 2);
    assert_eq!(z.terms()[0].exponents.as_slice(), &[0, 0, 3]);
    assert!((z.terms()[0].coefficient - 1.).abs() < 1e-9);
    assert_eq!(z.terms()[1].exponents.as_slice(), &[0, 0, 0]);
    assert!((z.terms()[1].coefficient + 1.).abs() < 1e-9);

    assert_eq!(
        leading_monomials(&basis),
        vec![vec![0, 0, 3], vec![0, 2, 0], vec![1, 0, 0]]
    );
}

#[test]
fn buchberger_criterion() {
    for order in ORDERS {
        for ideal in [
            two_circles(order),
            parallel_lines(order),
            twisted_cubic(order),
            cyclic3(order),
        ] {
            let basis = solve(&ideal).unwrap();
            assert!(GroebnerBasis::is_groebner_basis(&basis).unwrap());
        }
    }
}

#[test]
fn generators_are_members() {
    for order in ORDERS {
        for ideal in [two_circles(order), twisted_cubic(order), cyclic3(order)] {
            let gb = GroebnerBasis::new(&ideal, false).unwrap();
            for p in &ideal {
                assert!(gb.contains(p).unwrap(), "{} not in ideal ({})", p, order);
            }
        }
    }
}

#[test]
fn idempotence() {
    for ideal in [
        two_circles(MonomialOrder::GRevLex),
        twisted_cubic(MonomialOrder::GRevLex),
        cyclic3(MonomialOrder::GRevLex),
        twisted_cubic(MonomialOrder::Lex),
    ] {
        let basis = solve(&ideal).unwrap();
        assert_eq!(solve(&basis).unwrap(), basis);
    }
}

#[test]
fn minimality() {
    for order in ORDERS {
        for ideal in [twisted_cubic(order), cyclic3(order)] {
            let basis = solve(&ideal).unwrap();
            for (i, p1) in basis.iter().enumerate() {
                for (j, p2) in basis.iter().enumerate() {
                    if i != j {
                        let (l1, l2) = (p1.leading_term().unwrap(), p2.leading_term().unwrap());
                        assert!(!l1.divides(l2).unwrap());
                    }
                }
            }
        }
    }
}

#[test]
fn normal_form_closure() {
    let basis = solve(&twisted_cubic(MonomialOrder::GRevLex)).unwrap();
    let f = poly(
        MonomialOrder::GRevLex,
        &[
            (1., &[3, 1, 0]),
            (2., &[1, 2, 0]),
            (-1., &[0, 0, 1]),
            (5., &[0, 0, 0]),
        ],
    );

    let r = reduce(&f, &basis).unwrap();
    assert!(!r.is_zero());
    for t in r.terms() {
        for g in &basis {
            assert!(!g.leading_term().unwrap().divides(t).unwrap());
        }
    }

    // f and its normal form agree on the variety
    for t in [0.5, 2.] {
        let point = [t, t * t, t * t * t];
        assert!((f.evaluate(&point).unwrap() - r.evaluate(&point).unwrap()).abs() < 1e-9);
    }
}

#[test]
fn lex_twisted_cubic() {
    // x^2 - y, xy - z, xz - y^2, y^3 - z^2
    let basis = solve(&twisted_cubic(MonomialOrder::Lex)).unwrap();
    assert_eq!(
        leading_monomials(&basis),
        vec![vec![0, 3, 0], vec![1, 0, 1], vec![1, 1, 0], vec![2, 0, 0]]
    );
}

#[test]
fn mismatched_dimensions() {
    let ideal = vec![
        poly(MonomialOrder::GRevLex, &[(1., &[1, 0])]),
        poly(MonomialOrder::GRevLex, &[(1., &[1, 0, 0])]),
    ];
    assert_eq!(
        solve(&ideal),
        Err(PolynomialError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    );
}
