use super::error::{require_finite, require_non_negative, require_positive, DomainError};
use crate::units::Length;

/// 중력 가속도 [m/s2]
pub const GRAVITY: f64 = 9.81;

/// Darcy-Weisbach 식으로 수두 손실 [m]을 계산한다.
///
/// h_f = f · (L/D) · v² / (2g)
///
/// Pa 단위 압력손실이 필요하면 [`head_to_pressure`]로 환산한다.
pub fn pressure_loss(
    friction_factor: f64,
    diameter: Length,
    length: Length,
    velocity: f64,
) -> Result<f64, DomainError> {
    let friction_factor = require_finite("마찰계수", friction_factor)?;
    let diameter_m = require_positive("배관 내경", diameter.meters())?;
    let length_m = require_non_negative("배관 길이", length.meters())?;
    let velocity = require_finite("유속", velocity)?;
    Ok(friction_factor * (length_m / diameter_m) * velocity * velocity / (2.0 * GRAVITY))
}

/// 수두 [m]를 압력 [Pa]로 환산한다.
pub fn head_to_pressure(head_m: f64, density_kg_per_m3: f64) -> f64 {
    head_m * density_kg_per_m3 * GRAVITY
}
