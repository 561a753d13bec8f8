//! 단열(증발식) 가습기 성능 계산 모듈.
//! 단일 유닛의 순방향(설계점)/역방향(운전점) 계산과 전체 설비 환산으로 구성한다.

pub mod installation;
pub mod performance;

pub use installation::{installation_ratio, scale_to_installation, InstallationTotals};
pub use performance::{
    diagnose, ForwardInput, HumidifierModel, InverseInput, PerformanceWarning, ProcessResult,
};
