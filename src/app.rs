use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError, DefaultUnits};
use crate::conversion::ConversionError;
use crate::hydraulics::{self, DomainError, PipeFlowInput, PipeFlowResult};
use crate::session::ResultsTable;
use crate::ui_cli::{self, MenuChoice};
use crate::units::{convert_flow, convert_viscosity, flow, FlowUnit, Length, ViscosityUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 수력 계산 오류
    #[error("계산 오류: {0}")]
    Domain(#[from] DomainError),
}

/// 사용자가 입력한 값. 각 값은 설정의 기본 단위로 해석한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcValues {
    pub flow: f64,
    pub diameter: f64,
    pub density_kg_per_m3: f64,
    pub viscosity: f64,
    pub roughness: f64,
    pub length: f64,
}

impl CalcValues {
    /// 입력 양식 기본값(0.121 m3/s, 243 mm, 1000 kg/m3, 0.00047 Pa·s,
    /// 0.046 mm, 100 m)을 주어진 단위로 표현한다.
    pub fn form_defaults(units: &DefaultUnits) -> Self {
        Self {
            flow: convert_flow(0.121, FlowUnit::CubicMeterPerSecond, units.flow),
            diameter: Length::from_millimeters(243.0).to(units.diameter),
            density_kg_per_m3: 1000.0,
            viscosity: convert_viscosity(0.00047, ViscosityUnit::PascalSecond, units.viscosity),
            roughness: Length::from_millimeters(0.046).to(units.roughness),
            length: Length::from_meters(100.0).to(units.length),
        }
    }

    /// 단위가 붙은 계산 입력으로 바꾼다. 길이 환산은 여기서 한 번만 일어난다.
    pub fn to_input(&self, units: &DefaultUnits) -> PipeFlowInput {
        PipeFlowInput {
            flow_m3_per_s: flow::to_cubic_meter_per_second(self.flow, units.flow),
            diameter: Length::new(self.diameter, units.diameter),
            density_kg_per_m3: self.density_kg_per_m3,
            dynamic_viscosity_pa_s: convert_viscosity(
                self.viscosity,
                units.viscosity,
                ViscosityUnit::PascalSecond,
            ),
            roughness: Length::new(self.roughness, units.roughness),
            length: Length::new(self.length, units.length),
        }
    }
}

/// 입력값을 설정 단위로 해석해 압력손실을 계산한다.
pub fn calculate(
    values: &CalcValues,
    config: &Config,
) -> Result<(PipeFlowInput, PipeFlowResult), AppError> {
    let input = values.to_input(&config.default_units);
    let result = hydraulics::compute_pipe_flow(&input, &config.solver)?;
    Ok((input, result))
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 기록 표는 이 루프 동안만 유지된다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let mut table = ResultsTable::new();
    loop {
        let choice = match ui_cli::main_menu() {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::Calculate => ui_cli::handle_calculation(config, &mut table),
            MenuChoice::ShowRecords => {
                ui_cli::print_records(&table);
                Ok(())
            }
            MenuChoice::DeleteRecords => ui_cli::handle_delete_records(&mut table),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(),
            MenuChoice::Settings => ui_cli::handle_settings(config)
                .and_then(|()| config.save(config_path).map_err(AppError::from)),
            MenuChoice::Exit => {
                println!("프로그램을 종료합니다.");
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            // 계산/변환 오류는 메뉴로 돌아가 다시 입력받는다.
            Err(e @ (AppError::Domain(_) | AppError::Conversion(_))) => println!("오류: {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
