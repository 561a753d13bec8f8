use log::debug;

use crate::air::psychrometrics::{
    clamp_relative_humidity_pct, humidity_ratio_from_enthalpy, STANDARD_PRESSURE_PA,
};
use crate::air::AirState;
use crate::config::Config;

/// 건공기 밀도 기본값 [kg/m³]
pub const DEFAULT_AIR_DENSITY_KG_PER_M3: f64 = 1.2;

/// 설계점(순방향) 계산 입력. 출구 온도를 알고 효율을 구한다.
#[derive(Debug, Clone, Copy)]
pub struct ForwardInput {
    /// 단일 유닛 풍량 [m³/h]
    pub volumetric_flow_m3_per_h: f64,
    /// 입구 건구온도 [°C]
    pub inlet_temp_c: f64,
    /// 입구 상대습도 [%]
    pub inlet_rh_pct: f64,
    /// 출구 건구온도 [°C]
    pub outlet_temp_c: f64,
    /// 출구 상대습도 [%]. `None`이면 출구 상태를 등엔탈피 조건으로 복원한다.
    pub outlet_rh_pct: Option<f64>,
}

/// 운전점(역방향) 계산 입력. 효율을 알고 출구 온도를 구한다.
#[derive(Debug, Clone, Copy)]
pub struct InverseInput {
    /// 단일 유닛 풍량 [m³/h]
    pub volumetric_flow_m3_per_h: f64,
    /// 입구 건구온도 [°C]
    pub inlet_temp_c: f64,
    /// 입구 상대습도 [%]
    pub inlet_rh_pct: f64,
    /// 포화 효율 [-]
    pub efficiency: f64,
}

/// 가습기 한 대의 입출구 상태와 성능.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessResult {
    pub state_in: AirState,
    pub state_out: AirState,
    /// 포화 효율 η = (T_in - T_out) / (T_in - Twb_in). 0..1 로 제한하지 않는다.
    pub efficiency: f64,
    /// 가습(물 소비)량 [L/h]
    pub water_rate_l_per_h: f64,
    /// 냉각 열량 [kW]. T_in > T_out 이면 양수.
    pub power_kw: f64,
}

/// 성능 결과에 대한 주의 사항. 계산값은 바꾸지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceWarning {
    /// 입구 상대습도가 100% 초과 (측정 오류 가능성, 값은 그대로 사용)
    InletSupersaturated,
    /// 입구 공기가 이미 포화되어 효율을 정의할 수 없음
    EfficiencyUndefined,
    /// 효율이 1 초과 (출구가 습구온도보다 낮음)
    EfficiencyAboveUnity,
    /// 출구 상대습도가 100% 초과
    OutletSupersaturated,
    /// 가습량이 음수 (제습 방향)
    NegativeWaterRate,
}

/// 단열 가습기 성능 모델.
///
/// 대기압과 공기 밀도는 인스턴스 수명 동안 고정이다.
/// 설계 효율은 모델이 보관하지 않고 [`InverseInput::efficiency`]로 매번 전달받는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidifierModel {
    pub atmospheric_pressure_pa: f64,
    pub air_density_kg_per_m3: f64,
}

impl Default for HumidifierModel {
    fn default() -> Self {
        Self {
            atmospheric_pressure_pa: STANDARD_PRESSURE_PA,
            air_density_kg_per_m3: DEFAULT_AIR_DENSITY_KG_PER_M3,
        }
    }
}

impl HumidifierModel {
    /// 비표준 고도/조건용 상수로 모델을 생성한다.
    pub fn new(atmospheric_pressure_pa: f64, air_density_kg_per_m3: f64) -> Self {
        Self {
            atmospheric_pressure_pa,
            air_density_kg_per_m3,
        }
    }

    /// 설정 파일의 상수로 모델을 생성한다.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.atmospheric_pressure_pa, cfg.air_density_kg_per_m3)
    }

    /// 출구 온도를 알고 있을 때 효율, 가습량, 냉각 열량을 계산한다.
    ///
    /// 출구 상대습도가 주어지면(설계점) 출구 상태를 (T, RH)로 독립 계산하고,
    /// 없으면 입구와 같은 엔탈피로 출구 습도비를 복원한다.
    pub fn forward(&self, input: ForwardInput) -> ProcessResult {
        let p = self.atmospheric_pressure_pa;
        let state_in = AirState::from_temperature_rh(input.inlet_temp_c, input.inlet_rh_pct, p);
        let state_out = match input.outlet_rh_pct {
            Some(rh_out) => AirState::from_temperature_rh(input.outlet_temp_c, rh_out, p),
            None => self.isenthalpic_outlet(&state_in, input.outlet_temp_c),
        };
        let efficiency = saturation_efficiency(&state_in, state_out.temperature_c);
        debug!(
            "forward: vol={} T_in={} RH_in={} T_out={} -> eta={efficiency}",
            input.volumetric_flow_m3_per_h,
            input.inlet_temp_c,
            input.inlet_rh_pct,
            input.outlet_temp_c
        );
        self.finish(input.volumetric_flow_m3_per_h, state_in, state_out, efficiency)
    }

    /// 효율을 알고 있을 때 출구 온도와 상태를 구한다.
    ///
    /// T_out = T_in - η (T_in - Twb_in), 출구 상태는 등엔탈피로 닫는다.
    pub fn inverse(&self, input: InverseInput) -> ProcessResult {
        let p = self.atmospheric_pressure_pa;
        let state_in = AirState::from_temperature_rh(input.inlet_temp_c, input.inlet_rh_pct, p);
        let outlet_temp_c =
            state_in.temperature_c - input.efficiency * state_in.wet_bulb_depression_k();
        let state_out = self.isenthalpic_outlet(&state_in, outlet_temp_c);
        debug!(
            "inverse: vol={} T_in={} RH_in={} eta={} -> T_out={outlet_temp_c}",
            input.volumetric_flow_m3_per_h, input.inlet_temp_c, input.inlet_rh_pct, input.efficiency
        );
        self.finish(
            input.volumetric_flow_m3_per_h,
            state_in,
            state_out,
            input.efficiency,
        )
    }

    /// 가습량 [L/h] = 풍량 * ρ * Δx / 1000 (물 1 kg = 1 L).
    pub fn water_rate_l_per_h(
        &self,
        volumetric_flow_m3_per_h: f64,
        state_in: &AirState,
        state_out: &AirState,
    ) -> f64 {
        volumetric_flow_m3_per_h
            * self.air_density_kg_per_m3
            * (state_out.humidity_ratio_g_per_kg - state_in.humidity_ratio_g_per_kg)
            / 1000.0
    }

    /// 냉각 열량 [kW] = 질량유량[kg/s] * 입구 습공기 비열 * (T_in - T_out).
    pub fn power_kw(
        &self,
        volumetric_flow_m3_per_h: f64,
        state_in: &AirState,
        state_out: &AirState,
    ) -> f64 {
        let mass_flow_kg_per_s = volumetric_flow_m3_per_h / 3600.0 * self.air_density_kg_per_m3;
        mass_flow_kg_per_s
            * state_in.moist_specific_heat_kj_per_kg_k()
            * (state_in.temperature_c - state_out.temperature_c)
    }

    fn isenthalpic_outlet(&self, state_in: &AirState, outlet_temp_c: f64) -> AirState {
        let x_out = humidity_ratio_from_enthalpy(state_in.enthalpy_kj_per_kg, outlet_temp_c);
        let mut state_out = AirState::from_temperature_humidity_ratio(
            outlet_temp_c,
            x_out,
            self.atmospheric_pressure_pa,
        );
        if state_out.relative_humidity_pct > 100.0 {
            debug!(
                "outlet RH {} clamped to saturation",
                state_out.relative_humidity_pct
            );
        }
        state_out.relative_humidity_pct =
            clamp_relative_humidity_pct(state_out.relative_humidity_pct);
        state_out
    }

    fn finish(
        &self,
        volumetric_flow_m3_per_h: f64,
        state_in: AirState,
        state_out: AirState,
        efficiency: f64,
    ) -> ProcessResult {
        ProcessResult {
            water_rate_l_per_h: self.water_rate_l_per_h(
                volumetric_flow_m3_per_h,
                &state_in,
                &state_out,
            ),
            power_kw: self.power_kw(volumetric_flow_m3_per_h, &state_in, &state_out),
            state_in,
            state_out,
            efficiency,
        }
    }
}

/// 포화 효율. 입구가 포화 상태(T_in == Twb_in)이면 NaN.
pub fn saturation_efficiency(state_in: &AirState, outlet_temp_c: f64) -> f64 {
    let depression = state_in.wet_bulb_depression_k();
    if depression == 0.0 {
        debug!("inlet saturated, efficiency undefined");
        return f64::NAN;
    }
    (state_in.temperature_c - outlet_temp_c) / depression
}

/// 결과를 점검하여 주의 사항 목록을 만든다.
pub fn diagnose(result: &ProcessResult) -> Vec<PerformanceWarning> {
    let mut warnings = Vec::new();
    if result.state_in.relative_humidity_pct > 100.0 {
        warnings.push(PerformanceWarning::InletSupersaturated);
    }
    if result.efficiency.is_nan() && result.state_in.wet_bulb_depression_k() == 0.0 {
        warnings.push(PerformanceWarning::EfficiencyUndefined);
    } else if result.efficiency > 1.0 {
        warnings.push(PerformanceWarning::EfficiencyAboveUnity);
    }
    if result.state_out.relative_humidity_pct > 100.0 {
        warnings.push(PerformanceWarning::OutletSupersaturated);
    }
    if result.water_rate_l_per_h < 0.0 {
        warnings.push(PerformanceWarning::NegativeWaterRate);
    }
    warnings
}
