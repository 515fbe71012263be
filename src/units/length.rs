use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Kilometer,
    Inch,
    Foot,
    Yard,
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Kilometer => value * 1000.0,
        LengthUnit::Inch => value * 0.0254,
        LengthUnit::Foot => value * 0.3048,
        LengthUnit::Yard => value * 0.9144,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Kilometer => value_m / 1000.0,
        LengthUnit::Inch => value_m / 0.0254,
        LengthUnit::Foot => value_m / 0.3048,
        LengthUnit::Yard => value_m / 0.9144,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

/// 단위가 붙은 길이 값. 내부에는 항상 미터로 저장한다.
///
/// 배관 내경, 거칠기, 길이는 모두 이 타입으로 주고받는다. mm → m 환산은
/// 생성 시점에 한 번만 일어나므로 이미 환산된 값을 다시 나누는 실수가
/// 타입 수준에서 막힌다.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Length {
    meters: f64,
}

impl Length {
    /// 임의 단위의 값으로부터 길이를 만든다.
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self {
            meters: to_meter(value, unit),
        }
    }

    pub fn from_meters(value: f64) -> Self {
        Self { meters: value }
    }

    pub fn from_millimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Millimeter)
    }

    /// 미터 값.
    pub fn meters(self) -> f64 {
        self.meters
    }

    pub fn millimeters(self) -> f64 {
        self.to(LengthUnit::Millimeter)
    }

    /// 원하는 단위의 수치로 꺼낸다.
    pub fn to(self, unit: LengthUnit) -> f64 {
        from_meter(self.meters, unit)
    }
}

impl LengthUnit {
    /// 화면 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
        }
    }
}
