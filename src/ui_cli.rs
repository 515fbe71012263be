use std::io::{self, Write};

use crate::app::{self, AppError, CalcValues};
use crate::config::{Config, DefaultUnits, UnitSystem};
use crate::conversion;
use crate::hydraulics::{FlowRegime, PipeFlowInput, PipeFlowResult};
use crate::quantity::QuantityKind;
use crate::session::{self, Record, ResultsTable};
use crate::units::{convert_velocity, pressure, VelocityUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    ShowRecords,
    DeleteRecords,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== 배관 압력손실 계산기 ===");
    println!("1) 압력손실 계산");
    println!("2) 기록 보기");
    println!("3) 기록 삭제");
    println!("4) 단위 변환기");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::ShowRecords),
            "3" => return Ok(MenuChoice::DeleteRecords),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 압력손실 계산 메뉴를 처리한다. 엔터만 누르면 기본값을 사용한다.
pub fn handle_calculation(cfg: &Config, table: &mut ResultsTable) -> Result<(), AppError> {
    let units = &cfg.default_units;
    let defaults = CalcValues::form_defaults(units);
    println!("\n-- 압력손실 계산 --");
    let values = CalcValues {
        flow: read_f64_or(
            &format!("유량 [{}]", units.flow.symbol()),
            defaults.flow,
        )?,
        diameter: read_f64_or(
            &format!("배관 내경 [{}]", units.diameter.symbol()),
            defaults.diameter,
        )?,
        density_kg_per_m3: read_f64_or("유체 밀도 [kg/m3]", defaults.density_kg_per_m3)?,
        viscosity: read_f64_or(
            &format!("유체 점도 [{}]", units.viscosity.symbol()),
            defaults.viscosity,
        )?,
        roughness: read_f64_or(
            &format!("배관 거칠기 [{}]", units.roughness.symbol()),
            defaults.roughness,
        )?,
        length: read_f64_or(
            &format!("배관 길이 [{}]", units.length.symbol()),
            defaults.length,
        )?,
    };
    let (input, result) = app::calculate(&values, cfg)?;
    print_result(&input, &result, units);

    let add = read_line("기록에 추가할까요? (y/N): ")?;
    if matches!(add.trim(), "y" | "Y") {
        let index = table.push(Record::from_calculation(&input, &result));
        println!("{index}번 행으로 추가했습니다.");
    }
    Ok(())
}

/// 계산 결과를 출력한다.
pub fn print_result(input: &PipeFlowInput, result: &PipeFlowResult, units: &DefaultUnits) {
    let velocity = convert_velocity(
        result.velocity_m_per_s,
        VelocityUnit::MeterPerSecond,
        units.velocity,
    );
    println!(
        "단면적: {:.5} m2 (내경 {:.1} mm)",
        result.area_m2,
        input.diameter.millimeters()
    );
    println!("유속: {velocity:.3} {}", units.velocity.symbol());
    println!(
        "레이놀즈수: {:.0} ({})",
        result.reynolds,
        regime_label(result.regime)
    );
    println!(
        "마찰계수: {:.5} (반복 {}회, 상대 오차 {:.2e})",
        result.friction.friction_factor, result.friction.iterations, result.friction.relative_error
    );
    if let Some(w) = result.friction.warning() {
        println!("경고: {w}");
    }
    if !result.regime.is_turbulent() {
        println!("경고: Colebrook-White 식은 난류(Re ≥ 4000) 범위에서만 유효합니다.");
    }
    println!(
        "압력손실: {:.2} m | {:.2} Pa | {:.4} {}",
        result.head_loss_m,
        result.pressure_drop_pa,
        pressure::from_pascal(result.pressure_drop_pa, units.pressure),
        units.pressure.symbol()
    );
}

fn regime_label(regime: FlowRegime) -> &'static str {
    match regime {
        FlowRegime::Laminar => "층류",
        FlowRegime::Transitional => "천이 영역",
        FlowRegime::Turbulent => "난류",
    }
}

/// 기록 표와 압력손실 합계를 출력한다.
pub fn print_records(table: &ResultsTable) {
    println!("\n-- 기록 --");
    if table.is_empty() {
        println!("저장된 기록이 없습니다.");
        return;
    }
    println!(
        "{:>3} {:>10} {:>10} {:>10} {:>12} {:>10} {:>14}",
        "#", "유량[m3/s]", "유속[m/s]", "밀도", "점도[Pa·s]", "마찰계수", "압력손실[Pa]"
    );
    for (i, r) in table.records().iter().enumerate() {
        println!(
            "{:>3} {:>10.4} {:>10.3} {:>10.1} {:>12.3e} {:>10.5} {:>14.2}",
            i,
            r.flow_m3_per_s,
            r.velocity_m_per_s,
            r.density_kg_per_m3,
            r.viscosity_pa_s,
            r.friction_factor,
            r.pressure_drop_pa
        );
    }
    println!(
        "압력손실 합계: {:.2} Pa",
        table.total_pressure_drop_pa()
    );
}

/// 기록 삭제 메뉴를 처리한다.
pub fn handle_delete_records(table: &mut ResultsTable) -> Result<(), AppError> {
    print_records(table);
    if table.is_empty() {
        return Ok(());
    }
    let sel = read_line("삭제할 행 번호 (예: 0,2 / 취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match session::parse_selection(&sel) {
        Ok(indices) => {
            let removed = table.remove_indices(&indices);
            println!("{removed}개 행을 삭제했습니다.");
        }
        Err(_) => println!("행 번호는 0 이상의 정수로 입력하세요."),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 길이  2) 압력차  3) 속도  4) 점도  5) 유량");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        if let Some(kind) = map_quantity(sel.trim()) {
            break kind;
        }
        println!("지원하지 않는 번호입니다.");
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: mm, kPa, m3/h): ")?;
    let to_unit = read_line("변환 단위(ex: in, psi, gpm): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

fn map_quantity(sel: &str) -> Option<QuantityKind> {
    let n: usize = sel.parse().ok()?;
    QuantityKind::ALL.get(n.checked_sub(1)?).copied()
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 단위 시스템: {:?}", cfg.unit_system);
    println!(
        "현재 해석기: 수렴 기준 {:e}, 최대 반복 {}회",
        cfg.solver.tolerance, cfg.solver.max_iterations
    );
    println!("1) Metric  2) Imperial");
    let sel = read_line("단위 시스템 번호(유지하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => cfg.set_unit_system(UnitSystem::Metric),
        "2" => cfg.set_unit_system(UnitSystem::Imperial),
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }

    let mut solver = cfg.solver;
    solver.tolerance = read_f64_or("수렴 기준", solver.tolerance)?;
    solver.max_iterations = read_count_or("최대 반복 횟수", solver.max_iterations)?;
    match solver.validate() {
        Ok(()) => cfg.solver = solver,
        Err(e) => println!("해석기 설정을 변경하지 않습니다: {e}"),
    }
    println!("단위 시스템이 {:?} 로 설정되었습니다.", cfg.unit_system);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 빈 입력이면 `default`, 그 외에는 1 이상의 정수만 받아들인다.
pub fn parse_count_or(input: &str, default: u32) -> Option<u32> {
    let s = input.trim();
    if s.is_empty() {
        return Some(default);
    }
    s.parse::<u32>().ok().filter(|&n| n >= 1)
}

fn read_count_or(label: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{label} (기본 {default}): "))?;
        match parse_count_or(&s, default) {
            Some(v) => return Ok(v),
            None => println!("1 이상의 정수를 입력하세요."),
        }
    }
}

fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} (기본 {default}): "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
