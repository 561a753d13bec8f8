//! 습공기 물성 계산 모듈.
//! 선도 기본 함수(포화압, 습도비, 엔탈피, 이슬점, 습구온도)와 상태점 구성으로 나뉜다.

pub mod humid_air;
pub mod psychrometrics;

pub use humid_air::AirState;
