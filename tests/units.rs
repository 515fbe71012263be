//! 단위 변환과 Length 타입 테스트.
use approx::assert_relative_eq;
use pipe_pressure_drop::conversion::{convert, parse_quantity, ConversionError};
use pipe_pressure_drop::quantity::QuantityKind;
use pipe_pressure_drop::units::{
    convert_pressure, convert_velocity, Length, LengthUnit, PressureUnit, VelocityUnit,
};

#[test]
fn length_is_stored_in_meters() {
    let d = Length::from_millimeters(243.0);
    assert_relative_eq!(d.meters(), 0.243, max_relative = 1e-15);
    assert_relative_eq!(d.millimeters(), 243.0, max_relative = 1e-12);
    assert_relative_eq!(
        Length::new(1.0, LengthUnit::Inch).millimeters(),
        25.4,
        max_relative = 1e-12
    );
}

#[test]
fn pressure_difference_has_no_atmospheric_offset() {
    assert_relative_eq!(
        convert_pressure(0.0, PressureUnit::Bar, PressureUnit::Pascal),
        0.0
    );
    assert_relative_eq!(
        convert_pressure(1.0, PressureUnit::Bar, PressureUnit::Pascal),
        100_000.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_pressure(20_080.67, PressureUnit::Pascal, PressureUnit::KiloPascal),
        20.080_67,
        max_relative = 1e-12
    );
}

#[test]
fn string_conversions() {
    let inch = convert(QuantityKind::Length, 243.0, "mm", "in").expect("length");
    assert_relative_eq!(inch, 9.566_929_133_858_268, max_relative = 1e-12);

    let psi = convert(QuantityKind::Pressure, 1.0, "psi", "Pa").expect("pressure");
    assert_relative_eq!(psi, 6_894.757, max_relative = 1e-9);

    let m3s = convert(QuantityKind::FlowRate, 3600.0, "m3/h", "m3/s").expect("flow");
    assert_relative_eq!(m3s, 1.0, max_relative = 1e-12);

    let gpm = convert(QuantityKind::FlowRate, 0.121, "m3/s", "gpm").expect("gpm");
    assert_relative_eq!(gpm, 1_917.889_1, max_relative = 1e-6);

    let pas = convert(QuantityKind::Viscosity, 0.47, "cP", "Pa.s").expect("visc");
    assert_relative_eq!(pas, 0.00047, max_relative = 1e-12);

    let kmh = convert(QuantityKind::Velocity, 1.0, "m/s", "km/h").expect("velocity");
    assert_relative_eq!(kmh, 3.6, max_relative = 1e-12);
}

#[test]
fn velocity_units_share_one_base() {
    // 기준 배관 평균 유속 2.609 m/s
    let v = 2.609_053_242_44;
    assert_relative_eq!(
        convert_velocity(v, VelocityUnit::MeterPerSecond, VelocityUnit::FootPerSecond),
        8.559_885_966,
        max_relative = 1e-9
    );
    let fpm = convert(QuantityKind::Velocity, 1.0, "ft/s", "fpm").expect("fpm");
    assert_relative_eq!(fpm, 60.0, max_relative = 1e-12);
    let back = convert_velocity(
        convert_velocity(v, VelocityUnit::MeterPerSecond, VelocityUnit::KilometerPerHour),
        VelocityUnit::KilometerPerHour,
        VelocityUnit::FootPerMinute,
    );
    assert_relative_eq!(back, v / 0.3048 * 60.0, max_relative = 1e-12);
    assert_eq!(VelocityUnit::FootPerMinute.symbol(), "ft/min");
}

#[test]
fn unknown_unit_and_quantity_are_errors() {
    assert_eq!(
        convert(QuantityKind::Length, 1.0, "furlong", "m"),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    assert_eq!(parse_quantity("flow"), Ok(QuantityKind::FlowRate));
    assert!(matches!(
        parse_quantity("temperature"),
        Err(ConversionError::UnknownQuantity(_))
    ));
}
