//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod length;
pub mod pressure;
pub mod velocity;
pub mod viscosity;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, Length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
