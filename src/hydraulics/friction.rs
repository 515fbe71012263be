//! Colebrook-White 마찰계수 해석기.
//!
//! 음함수 형태의 식
//!
//! ```text
//! 1/√f = -2·log10( ε/(3.7·D) + 2.51/(Re·√f) )
//! ```
//!
//! 을 고정점 반복(축차 대입)으로 푼다. 현실적인 난류 입력(Re > 4000,
//! ε/D < 0.05)에서는 보통 10회 이내로 수렴한다.
//!
//! 층류(Re < 2300)는 이 식의 적용 범위 밖이다. 해석기는 유동 영역에 따라
//! 분기하지 않으며, 판정과 경고는 호출자 몫이다([`super::FlowRegime`]).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::error::{require_non_negative, require_positive, DomainError};
use crate::units::Length;

/// 반복 해석 설정값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 상대 오차 수렴 기준
    pub tolerance: f64,
    /// 최대 반복 횟수. 도달하면 마지막 값을 그대로 반환한다.
    pub max_iterations: u32,
    /// 초기 마찰계수 추정값
    pub initial_guess: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
            initial_guess: 0.02,
        }
    }
}

impl SolverConfig {
    /// 설정값이 반복 계산에 쓸 수 있는지 검사한다.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_positive("수렴 기준", self.tolerance)?;
        require_positive("초기 마찰계수", self.initial_guess)?;
        if self.max_iterations == 0 {
            return Err(DomainError::NoIterations);
        }
        Ok(())
    }
}

/// 마찰계수 해석 결과와 수렴 진단 정보.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionSolution {
    /// Darcy 마찰계수
    pub friction_factor: f64,
    /// 실제 수행한 반복 횟수
    pub iterations: u32,
    /// 마지막 반복의 상대 오차
    pub relative_error: f64,
    /// 수렴 기준 충족 여부
    pub converged: bool,
}

impl FrictionSolution {
    /// 최대 반복에 걸려 멈춘 경우 경고를 돌려준다.
    pub fn warning(&self) -> Option<NonConvergenceWarning> {
        if self.converged {
            None
        } else {
            Some(NonConvergenceWarning {
                iterations: self.iterations,
                relative_error: self.relative_error,
                friction_factor: self.friction_factor,
            })
        }
    }
}

/// 반복 상한에 도달해 수렴 기준을 만족하지 못했음을 알린다.
/// 값 자체는 최선의 추정치로 여전히 사용할 수 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonConvergenceWarning {
    pub iterations: u32,
    pub relative_error: f64,
    pub friction_factor: f64,
}

impl fmt::Display for NonConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "마찰계수가 {}회 반복 후에도 수렴하지 않았습니다 (상대 오차 {:.3e}, f={:.6})",
            self.iterations, self.relative_error, self.friction_factor
        )
    }
}

/// 기본 설정으로 마찰계수를 계산한다.
pub fn friction_factor(
    diameter: Length,
    reynolds_number: f64,
    roughness: Length,
) -> Result<f64, DomainError> {
    let solution = solve_colebrook(
        diameter,
        reynolds_number,
        roughness,
        &SolverConfig::default(),
    )?;
    Ok(solution.friction_factor)
}

/// Colebrook-White 식을 고정점 반복으로 풀고 진단 정보를 함께 반환한다.
pub fn solve_colebrook(
    diameter: Length,
    reynolds_number: f64,
    roughness: Length,
    config: &SolverConfig,
) -> Result<FrictionSolution, DomainError> {
    config.validate()?;
    let diameter_m = require_positive("배관 내경", diameter.meters())?;
    let reynolds_number = require_positive("레이놀즈수", reynolds_number)?;
    let roughness_m = require_non_negative("거칠기", roughness.meters())?;

    let roughness_term = roughness_m / (3.7 * diameter_m);
    let mut f_old = config.initial_guess;
    let mut iterations = 0u32;

    loop {
        let log_arg = roughness_term + 2.51 / (reynolds_number * f_old.sqrt());
        // -2·log10(arg) 가 양수여야 1/√f 의 근이 존재한다.
        if !(log_arg.is_finite() && log_arg > 0.0 && log_arg < 1.0) {
            return Err(DomainError::LogArgument {
                iteration: iterations + 1,
                value: log_arg,
            });
        }
        let f_new = 1.0 / (-2.0 * log_arg.log10()).powi(2);
        let relative_error = ((f_new - f_old) / f_new).abs();
        f_old = f_new;
        iterations += 1;
        trace!(iterations, f = f_new, relative_error, "Colebrook 반복");

        if relative_error <= config.tolerance {
            debug!(iterations, f = f_new, "마찰계수 수렴");
            return Ok(FrictionSolution {
                friction_factor: f_new,
                iterations,
                relative_error,
                converged: true,
            });
        }
        if iterations >= config.max_iterations {
            let solution = FrictionSolution {
                friction_factor: f_new,
                iterations,
                relative_error,
                converged: false,
            };
            if let Some(w) = solution.warning() {
                warn!("{w}");
            }
            return Ok(solution);
        }
    }
}
