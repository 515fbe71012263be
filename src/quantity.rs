/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    /// 압력차(압력손실)
    Pressure,
    Velocity,
    Viscosity,
    /// 체적 유량
    FlowRate,
}

impl QuantityKind {
    /// 모든 종류를 메뉴 순서대로 나열한다.
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Length,
        QuantityKind::Pressure,
        QuantityKind::Velocity,
        QuantityKind::Viscosity,
        QuantityKind::FlowRate,
    ];
}
