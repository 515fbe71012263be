//! Darcy-Weisbach 수두 손실과 전체 계산 흐름 테스트.
use approx::assert_relative_eq;
use pipe_pressure_drop::hydraulics::{
    compute_pipe_flow, cross_section_area, head_to_pressure, mean_velocity, pressure_loss,
    DomainError, FlowRegime, PipeFlowInput, SolverConfig,
};
use pipe_pressure_drop::units::Length;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * expected.abs(),
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn reference_input() -> PipeFlowInput {
    PipeFlowInput {
        flow_m3_per_s: 0.121,
        diameter: Length::from_millimeters(243.0),
        density_kg_per_m3: 1000.0,
        dynamic_viscosity_pa_s: 0.00047,
        roughness: Length::from_millimeters(0.046),
        length: Length::from_meters(100.0),
    }
}

#[test]
fn head_loss_scales_with_length_friction_and_velocity() {
    let d = Length::from_millimeters(243.0);
    let base = pressure_loss(0.015, d, Length::from_meters(100.0), 2.0).expect("base");
    let double_len = pressure_loss(0.015, d, Length::from_meters(200.0), 2.0).expect("len");
    let double_f = pressure_loss(0.030, d, Length::from_meters(100.0), 2.0).expect("f");
    let double_v = pressure_loss(0.015, d, Length::from_meters(100.0), 4.0).expect("v");
    assert_relative_eq!(double_len, 2.0 * base, max_relative = 1e-12);
    assert_relative_eq!(double_f, 2.0 * base, max_relative = 1e-12);
    assert_relative_eq!(double_v, 4.0 * base, max_relative = 1e-12);
    // 0.015 · (100/0.243) · 4 / 19.62
    assert_relative_eq!(base, 1.258_479_002, max_relative = 1e-6);
}

#[test]
fn zero_diameter_is_rejected() {
    let res = pressure_loss(0.02, Length::from_meters(0.0), Length::from_meters(10.0), 1.0);
    assert!(matches!(res, Err(DomainError::NotPositive { .. })));
    assert!(mean_velocity(0.1, Length::from_meters(0.0)).is_err());
}

#[test]
fn head_converts_to_pascal() {
    assert_relative_eq!(head_to_pressure(1.0, 1000.0), 9810.0, max_relative = 1e-12);
}

#[test]
fn reference_pipe_end_to_end() {
    let result = compute_pipe_flow(&reference_input(), &SolverConfig::default()).expect("pipe");
    assert_close("area", result.area_m2, 0.046_376_976_150, 1e-9);
    assert_close("velocity", result.velocity_m_per_s, 2.609_053_242_44, 1e-9);
    assert_close("reynolds", result.reynolds, 1_348_936.038_11, 1e-9);
    assert_eq!(result.regime, FlowRegime::Turbulent);
    assert!(result.friction.converged);
    assert_close("f", result.friction_factor(), 0.014_336_681, 1e-6);
    assert_close("head", result.head_loss_m, 2.046_959_39, 1e-6);
    assert_close("dp", result.pressure_drop_pa, 20_080.671_7, 1e-6);
    assert_relative_eq!(
        result.pressure_drop_pa,
        head_to_pressure(result.head_loss_m, 1000.0),
        max_relative = 1e-12
    );
}

#[test]
fn area_uses_diameter_once() {
    let d = Length::from_millimeters(243.0);
    assert_relative_eq!(
        cross_section_area(d),
        std::f64::consts::PI * (243.0_f64 / 2000.0).powi(2),
        max_relative = 1e-12
    );
}

#[test]
fn non_positive_flow_or_density_is_rejected() {
    let mut input = reference_input();
    input.flow_m3_per_s = 0.0;
    assert!(compute_pipe_flow(&input, &SolverConfig::default()).is_err());

    let mut input = reference_input();
    input.density_kg_per_m3 = -1.0;
    assert!(compute_pipe_flow(&input, &SolverConfig::default()).is_err());
}

#[test]
fn laminar_flow_is_flagged_not_branched() {
    let mut input = reference_input();
    input.flow_m3_per_s = 9e-5;
    let result = compute_pipe_flow(&input, &SolverConfig::default()).expect("laminar");
    assert_eq!(result.regime, FlowRegime::Laminar);
    assert!(result.reynolds > 900.0 && result.reynolds < 1100.0);
    // Colebrook 값 그대로이며 64/Re 로 바꾸지 않는다.
    assert!((result.friction_factor() - 64.0 / result.reynolds).abs() > 5e-4);
}
