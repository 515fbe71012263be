//! 세션 동안만 유지되는 계산 기록 표. 디스크에 저장하지 않는다.

use crate::hydraulics::{PipeFlowInput, PipeFlowResult};

/// 기록 표의 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 유량 [m3/s]
    pub flow_m3_per_s: f64,
    /// 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    pub friction_factor: f64,
    /// 압력강하 [Pa]
    pub pressure_drop_pa: f64,
}

impl Record {
    /// 계산 입력과 결과로부터 행을 만든다.
    pub fn from_calculation(input: &PipeFlowInput, result: &PipeFlowResult) -> Self {
        Self {
            flow_m3_per_s: input.flow_m3_per_s,
            velocity_m_per_s: result.velocity_m_per_s,
            density_kg_per_m3: input.density_kg_per_m3,
            viscosity_pa_s: input.dynamic_viscosity_pa_s,
            friction_factor: result.friction_factor(),
            pressure_drop_pa: result.pressure_drop_pa,
        }
    }
}

/// 계산 기록 표. 행 번호는 0부터 시작하며 삭제 후 다시 매겨진다.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    records: Vec<Record>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 행을 추가하고 그 번호를 반환한다.
    pub fn push(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// 선택한 번호의 행들을 삭제하고 실제로 지운 개수를 반환한다.
    /// 범위를 벗어나거나 중복된 번호는 무시한다.
    pub fn remove_indices(&mut self, indices: &[usize]) -> usize {
        let before = self.records.len();
        let mut index = 0;
        self.records.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
        before - self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 모든 행의 압력강하 합계 [Pa].
    pub fn total_pressure_drop_pa(&self) -> f64 {
        self.records.iter().map(|r| r.pressure_drop_pa).sum()
    }
}

/// "0, 2 3" 형태의 행 번호 목록을 해석한다. 쉼표와 공백 모두 구분자로 쓴다.
pub fn parse_selection(input: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
