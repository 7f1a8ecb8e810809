//! Numerical building blocks for inverting the resistance polynomial.
//!
//! ## Submodules
//! - `solvers`: closed-form quadratic roots and bracketed root finding

pub mod solvers;
