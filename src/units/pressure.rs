use serde::{Deserialize, Serialize};

/// 압력차 단위. 내부 기준은 Pa이다.
/// 압력손실은 두 지점 사이의 차이이므로 게이지/절대 보정을 하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    MilliBar,
    Psi,
    KgPerCm2,
    MmHg,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;
const PA_PER_KGF_CM2: f64 = 98_066.5;
const PA_PER_MMHG: f64 = 133.322_4;

/// 주어진 압력차를 Pa로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::MilliBar => value * 100.0,
        PressureUnit::Psi => value * PA_PER_PSI,
        PressureUnit::KgPerCm2 => value * PA_PER_KGF_CM2,
        PressureUnit::MmHg => value * PA_PER_MMHG,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::MilliBar => value_pa / 100.0,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
        PressureUnit::KgPerCm2 => value_pa / PA_PER_KGF_CM2,
        PressureUnit::MmHg => value_pa / PA_PER_MMHG,
    }
}

/// 압력차를 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}

impl PressureUnit {
    /// 화면 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Psi => "psi",
            PressureUnit::KgPerCm2 => "kgf/cm2",
            PressureUnit::MmHg => "mmHg",
        }
    }
}
