use log::debug;

use super::performance::ProcessResult;

/// 다수 유닛으로 구성된 전체 설비의 합계.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallationTotals {
    /// 전체 풍량 / 단일 유닛 풍량
    pub flow_ratio: f64,
    /// 전체 가습량 [L/h]
    pub water_total_l_per_h: f64,
    /// 전체 냉각 열량 [kW]
    pub power_total_kw: f64,
}

/// 전체 풍량과 단일 유닛 풍량의 비.
///
/// 단일 유닛 풍량이 0 이하(또는 NaN)이면 비를 정의할 수 없으므로 `None`.
pub fn installation_ratio(single_flow_m3_per_h: f64, total_flow_m3_per_h: f64) -> Option<f64> {
    if single_flow_m3_per_h > 0.0 {
        Some(total_flow_m3_per_h / single_flow_m3_per_h)
    } else {
        debug!("single unit flow {single_flow_m3_per_h} <= 0, installation totals undefined");
        None
    }
}

/// 단일 유닛 결과를 풍량비로 확대하여 설비 합계를 구한다.
pub fn scale_to_installation(
    unit: &ProcessResult,
    single_flow_m3_per_h: f64,
    total_flow_m3_per_h: f64,
) -> Option<InstallationTotals> {
    scale_values(
        unit.water_rate_l_per_h,
        unit.power_kw,
        single_flow_m3_per_h,
        total_flow_m3_per_h,
    )
}

/// 가습량/열량 값 자체를 풍량비로 확대한다.
pub fn scale_values(
    water_rate_l_per_h: f64,
    power_kw: f64,
    single_flow_m3_per_h: f64,
    total_flow_m3_per_h: f64,
) -> Option<InstallationTotals> {
    let ratio = installation_ratio(single_flow_m3_per_h, total_flow_m3_per_h)?;
    Some(InstallationTotals {
        flow_ratio: ratio,
        water_total_l_per_h: water_rate_l_per_h * ratio,
        power_total_kw: power_kw * ratio,
    })
}
