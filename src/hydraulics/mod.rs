//! 배관 마찰 손실 계산 모듈 모음.

pub mod darcy;
pub mod error;
pub mod friction;
pub mod pipe_flow;
pub mod reynolds;

pub use darcy::{head_to_pressure, pressure_loss, GRAVITY};
pub use error::DomainError;
pub use friction::{
    friction_factor, solve_colebrook, FrictionSolution, NonConvergenceWarning, SolverConfig,
};
pub use pipe_flow::*;
pub use reynolds::{reynolds, FlowRegime};
