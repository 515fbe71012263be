use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::hydraulics::{DomainError, SolverConfig};
use crate::units::*;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 미터법. 내경/거칠기 mm, 길이 m, 유량 m3/s.
    Metric,
    /// 영국식/야드파운드법
    Imperial,
}

/// 입력/출력 물리량별 기본 단위 설정을 담는다. 빠진 항목은 미터법 값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub flow: FlowUnit,
    pub diameter: LengthUnit,
    pub roughness: LengthUnit,
    pub length: LengthUnit,
    pub viscosity: ViscosityUnit,
    pub velocity: VelocityUnit,
    pub pressure: PressureUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 해당하는 기본 단위를 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                flow: FlowUnit::CubicMeterPerSecond,
                diameter: LengthUnit::Millimeter,
                roughness: LengthUnit::Millimeter,
                length: LengthUnit::Meter,
                viscosity: ViscosityUnit::PascalSecond,
                velocity: VelocityUnit::MeterPerSecond,
                pressure: PressureUnit::Pascal,
            },
            UnitSystem::Imperial => Self {
                flow: FlowUnit::UsGallonPerMinute,
                diameter: LengthUnit::Inch,
                roughness: LengthUnit::Inch,
                length: LengthUnit::Foot,
                viscosity: ViscosityUnit::Centipoise,
                velocity: VelocityUnit::FootPerSecond,
                pressure: PressureUnit::Psi,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    pub solver: SolverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            solver: SolverConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 해석기 설정값이 잘못된 경우
    #[error("잘못된 해석기 설정: {0}")]
    Invalid(#[from] DomainError),
}

impl Config {
    /// 단위 시스템을 바꾸고 기본 단위를 프리셋으로 다시 맞춘다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }

    /// TOML 문자열에서 설정을 읽고 해석기 설정을 검증한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.solver.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        info!(path = %path.display(), "설정 저장");
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        info!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}
