use tracing::warn;

use super::darcy::{head_to_pressure, pressure_loss};
use super::error::{require_positive, DomainError};
use super::friction::{solve_colebrook, FrictionSolution, SolverConfig};
use super::reynolds::{reynolds, FlowRegime};
use crate::units::Length;

/// 배관 압력손실 계산 입력. 길이 값은 단위가 붙은 [`Length`]로 받는다.
#[derive(Debug, Clone, Copy)]
pub struct PipeFlowInput {
    /// 체적 유량 [m3/s]
    pub flow_m3_per_s: f64,
    /// 내경
    pub diameter: Length,
    /// 유체 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 동점도 [Pa·s]
    pub dynamic_viscosity_pa_s: f64,
    /// 절대 거칠기
    pub roughness: Length,
    /// 배관 길이
    pub length: Length,
}

/// 압력손실 계산 결과. 중간값을 모두 담는다.
#[derive(Debug, Clone, Copy)]
pub struct PipeFlowResult {
    /// 단면적 [m2]
    pub area_m2: f64,
    /// 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction: FrictionSolution,
    /// 수두 손실 [m]
    pub head_loss_m: f64,
    /// 압력강하 [Pa]
    pub pressure_drop_pa: f64,
}

impl PipeFlowResult {
    pub fn friction_factor(&self) -> f64 {
        self.friction.friction_factor
    }
}

/// 원형 배관 단면적 π·(D/2)² [m2].
pub fn cross_section_area(diameter: Length) -> f64 {
    let radius = diameter.meters() / 2.0;
    std::f64::consts::PI * radius * radius
}

/// 유량과 내경으로 평균 유속 [m/s]을 구한다.
pub fn mean_velocity(flow_m3_per_s: f64, diameter: Length) -> Result<f64, DomainError> {
    require_positive("배관 내경", diameter.meters())?;
    Ok(flow_m3_per_s / cross_section_area(diameter))
}

/// 유량 → 유속 → Re → 마찰계수 → 수두 손실 → Pa 순으로 계산한다.
pub fn compute_pipe_flow(
    input: &PipeFlowInput,
    config: &SolverConfig,
) -> Result<PipeFlowResult, DomainError> {
    require_positive("유량", input.flow_m3_per_s)?;
    require_positive("밀도", input.density_kg_per_m3)?;
    require_positive("배관 길이", input.length.meters())?;

    let area_m2 = cross_section_area(input.diameter);
    let velocity = mean_velocity(input.flow_m3_per_s, input.diameter)?;
    let re = reynolds(
        input.density_kg_per_m3,
        velocity,
        input.diameter,
        input.dynamic_viscosity_pa_s,
    )?;
    let regime = FlowRegime::classify(re);
    if !regime.is_turbulent() {
        warn!(
            reynolds = re,
            ?regime,
            "Colebrook-White 적용 범위(난류) 밖의 유동입니다"
        );
    }

    let friction = solve_colebrook(input.diameter, re, input.roughness, config)?;
    let head_loss_m = pressure_loss(
        friction.friction_factor,
        input.diameter,
        input.length,
        velocity,
    )?;

    Ok(PipeFlowResult {
        area_m2,
        velocity_m_per_s: velocity,
        reynolds: re,
        regime,
        friction,
        head_loss_m,
        pressure_drop_pa: head_to_pressure(head_loss_m, input.density_kg_per_m3),
    })
}
