//! Reduced Gröbner bases of polynomial ideals with real coefficients,
//! computed with Buchberger's algorithm.
//!
//! For example:
//!
//! ```
//! use buchberger::{
//!     parser::parse_polynomial,
//!     poly::{groebner::GroebnerBasis, MonomialOrder},
//!     printer::default_var_names,
//! };
//!
//! let vars = default_var_names(2);
//! let ideal = [
//!     parse_polynomial("x^2 + y^2 - 1", &vars, MonomialOrder::GRevLex).unwrap(),
//!     parse_polynomial("x^2 + y^2 - 4y", &vars, MonomialOrder::GRevLex).unwrap(),
//! ];
//!
//! let basis = GroebnerBasis::new(&ideal, false).unwrap();
//! for p in &basis.system {
//!     println!("{}", p);
//! }
//! assert_eq!(basis.system.len(), 2);
//! ```
//!
//! Coefficients are `f64`. A computed coefficient is treated as zero when its
//! magnitude is at most [`poly::ZERO_THRESHOLD`], so ill-conditioned systems
//! may produce inaccurate bases.

pub mod parser;
pub mod poly;
pub mod printer;
