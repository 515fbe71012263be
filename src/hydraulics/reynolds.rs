use super::error::{require_finite, require_positive, DomainError};
use crate::units::Length;

/// 층류 상한 레이놀즈수.
pub const LAMINAR_LIMIT: f64 = 2300.0;
/// 완전 난류로 간주하는 하한 레이놀즈수.
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// 레이놀즈수에 따른 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Re < 2300
    Laminar,
    /// 2300 ≤ Re < 4000
    Transitional,
    /// Re ≥ 4000
    Turbulent,
}

impl FlowRegime {
    /// 레이놀즈수로 유동 영역을 판정한다.
    pub fn classify(reynolds_number: f64) -> Self {
        if reynolds_number < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if reynolds_number < TURBULENT_LIMIT {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    /// Colebrook-White 식이 유효한 영역인지 여부.
    pub fn is_turbulent(self) -> bool {
        self == FlowRegime::Turbulent
    }
}

/// 레이놀즈수 Re = ρ·v·D/μ 를 계산한다.
///
/// * `density` - 밀도 [kg/m3]
/// * `velocity` - 평균 유속 [m/s]
/// * `diameter` - 배관 내경
/// * `viscosity` - 동점도 [Pa·s]
pub fn reynolds(
    density: f64,
    velocity: f64,
    diameter: Length,
    viscosity: f64,
) -> Result<f64, DomainError> {
    let density = require_finite("밀도", density)?;
    let velocity = require_finite("유속", velocity)?;
    let diameter_m = require_positive("배관 내경", diameter.meters())?;
    let viscosity = require_positive("점도", viscosity)?;
    Ok(density * velocity * diameter_m / viscosity)
}
