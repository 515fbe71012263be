use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m3/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
    UsGallonPerMinute,
}

const M3_PER_US_GALLON: f64 = 0.003_785_411_784;

/// 유량을 m3/s로 변환한다.
pub fn to_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::LiterPerMinute => value / 60_000.0,
        FlowUnit::UsGallonPerMinute => value * M3_PER_US_GALLON / 60.0,
    }
}

fn from_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value * 3600.0,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::LiterPerMinute => value * 60_000.0,
        FlowUnit::UsGallonPerMinute => value * 60.0 / M3_PER_US_GALLON,
    }
}

/// 유량을 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let base = to_cubic_meter_per_second(value, from);
    from_cubic_meter_per_second(base, to)
}

impl FlowUnit {
    /// 화면 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerSecond => "m3/s",
            FlowUnit::CubicMeterPerHour => "m3/h",
            FlowUnit::LiterPerSecond => "L/s",
            FlowUnit::LiterPerMinute => "L/min",
            FlowUnit::UsGallonPerMinute => "gpm",
        }
    }
}
