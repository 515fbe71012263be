//! 설정 파일 직렬화/검증 테스트.
use pipe_pressure_drop::config::{self, Config, ConfigError, UnitSystem};
use pipe_pressure_drop::hydraulics::SolverConfig;
use pipe_pressure_drop::units::{LengthUnit, PressureUnit};

#[test]
fn default_solver_settings() {
    let cfg = Config::default();
    assert_eq!(cfg.solver, SolverConfig::default());
    assert_eq!(cfg.solver.tolerance, 1e-6);
    assert_eq!(cfg.solver.max_iterations, 1000);
    assert_eq!(cfg.solver.initial_guess, 0.02);
    assert_eq!(cfg.default_units.diameter, LengthUnit::Millimeter);
}

#[test]
fn toml_roundtrip_preserves_settings() {
    let mut cfg = Config::default();
    cfg.set_unit_system(UnitSystem::Imperial);
    cfg.solver.tolerance = 1e-9;
    let text = cfg.to_toml_string().expect("serialize");
    let back = Config::from_toml_str(&text).expect("parse");
    assert_eq!(back, cfg);
    assert_eq!(back.default_units.pressure, PressureUnit::Psi);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let cfg = Config::from_toml_str("[solver]\nmax_iterations = 50\n").expect("parse");
    assert_eq!(cfg.solver.max_iterations, 50);
    assert_eq!(cfg.solver.tolerance, 1e-6);
    assert_eq!(cfg.unit_system, UnitSystem::Metric);
}

#[test]
fn partial_default_units_keep_metric_for_missing_keys() {
    let cfg = Config::from_toml_str("[default_units]\npressure = \"Psi\"\n").expect("parse");
    assert_eq!(cfg.default_units.pressure, PressureUnit::Psi);
    assert_eq!(cfg.default_units.diameter, LengthUnit::Millimeter);
    assert_eq!(cfg.default_units.length, LengthUnit::Meter);
}

#[test]
fn invalid_solver_settings_fail_to_load() {
    let res = Config::from_toml_str("[solver]\nmax_iterations = 0\n");
    assert!(matches!(res, Err(ConfigError::Invalid(_))));
    let res = Config::from_toml_str("[solver]\ntolerance = -1.0\n");
    assert!(matches!(res, Err(ConfigError::Invalid(_))));
    let res = Config::from_toml_str("unit_system = \"Martian\"\n");
    assert!(matches!(res, Err(ConfigError::Parse(_))));
}

#[test]
fn load_or_default_creates_file() {
    let dir = std::env::temp_dir().join(format!("pipe_pressure_drop_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let created = config::load_or_default(&path).expect("create");
    assert!(path.exists());
    let loaded = config::load_or_default(&path).expect("reload");
    assert_eq!(created, loaded);

    let _ = std::fs::remove_dir_all(&dir);
}
