use thiserror::Error;

/// 수학적으로 정의되지 않는 입력을 표현한다. 재시도 없이 즉시 호출자에게 전달된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{quantity} 값이 유한하지 않습니다: {value}")]
    NotFinite { quantity: &'static str, value: f64 },
    #[error("{quantity} 값은 0보다 커야 합니다: {value}")]
    NotPositive { quantity: &'static str, value: f64 },
    #[error("{quantity} 값은 음수일 수 없습니다: {value}")]
    Negative { quantity: &'static str, value: f64 },
    /// Colebrook-White 로그 인자가 (0, 1) 범위를 벗어난 경우. 1 이상이면 우변이
    /// 0 이하가 되어 근이 없다 (Re가 0에 가까울 때).
    #[error("Colebrook-White 로그 인자가 (0, 1) 범위 밖입니다 (반복 {iteration}회차): {value}")]
    LogArgument { iteration: u32, value: f64 },
    /// 최대 반복 횟수가 0인 경우
    #[error("최대 반복 횟수는 1 이상이어야 합니다")]
    NoIterations,
}

pub(crate) fn require_finite(quantity: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NotFinite { quantity, value })
    }
}

pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64, DomainError> {
    require_finite(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NotPositive { quantity, value })
    }
}

pub(crate) fn require_non_negative(
    quantity: &'static str,
    value: f64,
) -> Result<f64, DomainError> {
    require_finite(quantity, value)?;
    if value < 0.0 {
        Err(DomainError::Negative { quantity, value })
    } else {
        Ok(value)
    }
}
