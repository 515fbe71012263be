//! 배관 마찰 압력손실 계산 라이브러리.
//!
//! 핵심은 [`hydraulics`]의 세 계산(레이놀즈수, Colebrook-White 마찰계수,
//! Darcy-Weisbach 수두 손실)이며, 나머지 모듈은 CLI와 설정을 위한 것이다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod hydraulics;
pub mod quantity;
pub mod session;
pub mod ui_cli;
pub mod units;
