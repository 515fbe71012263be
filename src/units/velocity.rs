use serde::{Deserialize, Serialize};

/// 배관 내 평균 유속 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
    /// 덕트/배관 설계에서 흔히 쓰는 ft/min
    FootPerMinute,
    KilometerPerHour,
}

const METER_PER_FOOT: f64 = 0.3048;

impl VelocityUnit {
    /// 1 단위가 몇 m/s 인지.
    fn meters_per_second(self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::FootPerSecond => METER_PER_FOOT,
            VelocityUnit::FootPerMinute => METER_PER_FOOT / 60.0,
            VelocityUnit::KilometerPerHour => 1.0 / 3.6,
        }
    }

    /// 결과 출력에 쓰는 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::FootPerMinute => "ft/min",
            VelocityUnit::KilometerPerHour => "km/h",
        }
    }
}

/// 유속을 변환한다. 두 단위 모두 m/s 배율 하나로 표현되므로 비율만 곱한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.meters_per_second() / to.meters_per_second()
}
