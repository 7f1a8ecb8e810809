//! Root-finding solvers for numerical computation.
//!
//! This module provides the two inversion strategies used by the model:
//! a closed-form quadratic for the Callendar form and a bracketing solver
//! for the full cubic.
//!
//! ## Available Solvers
//!
//! - [`small_root`] / [`quadratic_roots`]: cancellation-free quadratic formula
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! [`BrentSolver`] uses [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use cvd_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 on [0, 2] (find √2)
//! let solver = BrentSolver::new(SolverConfig::default());
//!
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod brent;
mod config;
mod error;
mod quadratic;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use error::SolverError;
pub use quadratic::{quadratic_roots, small_root};
