//! 기록 표와 입력 단위 해석 테스트.
use approx::assert_relative_eq;
use pipe_pressure_drop::app::{calculate, CalcValues};
use pipe_pressure_drop::config::{Config, UnitSystem};
use pipe_pressure_drop::session::{parse_selection, Record, ResultsTable};
use pipe_pressure_drop::ui_cli::parse_count_or;

fn record(dp: f64) -> Record {
    Record {
        flow_m3_per_s: 0.1,
        velocity_m_per_s: 2.0,
        density_kg_per_m3: 1000.0,
        viscosity_pa_s: 0.001,
        friction_factor: 0.015,
        pressure_drop_pa: dp,
    }
}

#[test]
fn rows_are_added_removed_and_totalled() {
    let mut table = ResultsTable::new();
    for dp in [100.0, 200.0, 300.0, 400.0] {
        table.push(record(dp));
    }
    assert_eq!(table.len(), 4);
    assert_relative_eq!(table.total_pressure_drop_pa(), 1000.0);

    // 범위를 벗어난 번호와 중복 번호는 무시한다.
    let removed = table.remove_indices(&[0, 2, 2, 9]);
    assert_eq!(removed, 2);
    let remaining: Vec<f64> = table.records().iter().map(|r| r.pressure_drop_pa).collect();
    assert_eq!(remaining, vec![200.0, 400.0]);
    assert_relative_eq!(table.total_pressure_drop_pa(), 600.0);

    // 삭제 후 번호가 다시 매겨진다.
    table.remove_indices(&[1]);
    assert_eq!(table.records()[0].pressure_drop_pa, 200.0);
}

#[test]
fn selection_parsing() {
    assert_eq!(parse_selection("0, 2 3"), Ok(vec![0, 2, 3]));
    assert_eq!(parse_selection("  "), Ok(vec![]));
    assert!(parse_selection("1,x").is_err());
    assert!(parse_selection("-1").is_err());
}

#[test]
fn calculation_row_matches_result() {
    let cfg = Config::default();
    let values = CalcValues::form_defaults(&cfg.default_units);
    let (input, result) = calculate(&values, &cfg).expect("calc");
    let row = Record::from_calculation(&input, &result);
    assert_relative_eq!(row.flow_m3_per_s, 0.121);
    assert_relative_eq!(row.pressure_drop_pa, result.pressure_drop_pa);
    assert_relative_eq!(row.friction_factor, result.friction_factor());
}

#[test]
fn imperial_inputs_give_same_result() {
    let metric = Config::default();
    let mut imperial = Config::default();
    imperial.set_unit_system(UnitSystem::Imperial);

    let (m_input, m) =
        calculate(&CalcValues::form_defaults(&metric.default_units), &metric).expect("metric");
    let (i_input, i) = calculate(&CalcValues::form_defaults(&imperial.default_units), &imperial)
        .expect("imperial");

    assert_relative_eq!(
        m_input.diameter.meters(),
        i_input.diameter.meters(),
        max_relative = 1e-12
    );
    assert_relative_eq!(m.reynolds, i.reynolds, max_relative = 1e-9);
    assert_relative_eq!(m.pressure_drop_pa, i.pressure_drop_pa, max_relative = 1e-9);
}

#[test]
fn iteration_count_input_accepts_only_positive_integers() {
    assert_eq!(parse_count_or("", 1000), Some(1000));
    assert_eq!(parse_count_or(" 250\n", 1000), Some(250));
    assert_eq!(parse_count_or("0", 1000), None);
    assert_eq!(parse_count_or("12.7", 1000), None);
    assert_eq!(parse_count_or("-5", 1000), None);
    assert_eq!(parse_count_or("1e12", 1000), None);
}
