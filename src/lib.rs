//! 핵심 계산 로직(습공기 선도, 가습기 성능, 설비 환산)을 라이브러리로 분리하여
//! CLI 외의 호출자도 같은 엔진을 쓰도록 한다.

pub mod air;
pub mod app;
pub mod config;
pub mod humidifier;
pub mod i18n;
pub mod report;
pub mod ui_cli;
