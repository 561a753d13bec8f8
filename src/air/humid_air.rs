use super::psychrometrics::{
    dew_point_c, enthalpy_kj_per_kg, humidity_ratio_g_per_kg, relative_humidity_pct, wet_bulb_c,
    CP_DRY_AIR, CP_VAPOR,
};

/// 습공기 상태점.
///
/// 대기압이 정해지면 (T, RH, x) 중 두 값으로 나머지가 모두 결정된다.
/// 정상 상태에서는 T >= Twb >= Tdp 이며, 등호는 포화(RH=100%)에서만 성립한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    /// 건구온도 [°C]
    pub temperature_c: f64,
    /// 상대습도 [%]
    pub relative_humidity_pct: f64,
    /// 습도비 [g수증기/kg건공기]
    pub humidity_ratio_g_per_kg: f64,
    /// 비엔탈피 [kJ/kg건공기]
    pub enthalpy_kj_per_kg: f64,
    /// 습구온도 [°C]
    pub wet_bulb_c: f64,
    /// 이슬점 온도 [°C]
    pub dew_point_c: f64,
}

impl AirState {
    /// 건구온도와 상대습도로 상태점을 구성한다.
    ///
    /// 입력 상대습도는 그대로 보존한다(100% 초과 측정값도 제한하지 않는다).
    pub fn from_temperature_rh(temperature_c: f64, rh_pct: f64, pressure_pa: f64) -> Self {
        let x = humidity_ratio_g_per_kg(temperature_c, rh_pct, pressure_pa);
        Self::complete(temperature_c, rh_pct, x, pressure_pa)
    }

    /// 건구온도와 습도비로 상태점을 구성한다. 상대습도는 대수적 역산값(제한 없음).
    pub fn from_temperature_humidity_ratio(
        temperature_c: f64,
        x_g_per_kg: f64,
        pressure_pa: f64,
    ) -> Self {
        let rh = relative_humidity_pct(temperature_c, x_g_per_kg, pressure_pa);
        Self::complete(temperature_c, rh, x_g_per_kg, pressure_pa)
    }

    fn complete(t: f64, rh: f64, x: f64, p: f64) -> Self {
        Self {
            temperature_c: t,
            relative_humidity_pct: rh,
            humidity_ratio_g_per_kg: x,
            enthalpy_kj_per_kg: enthalpy_kj_per_kg(t, x),
            wet_bulb_c: wet_bulb_c(t, x, p),
            dew_point_c: dew_point_c(x, p),
        }
    }

    /// 습공기 정압비열 [kJ/kg·K] (건공기 + 수증기 분).
    pub fn moist_specific_heat_kj_per_kg_k(&self) -> f64 {
        CP_DRY_AIR + CP_VAPOR * self.humidity_ratio_g_per_kg / 1000.0
    }

    /// 습구 강하(건구 - 습구) [K]. 증발 냉각으로 얻을 수 있는 최대 온도차.
    pub fn wet_bulb_depression_k(&self) -> f64 {
        self.temperature_c - self.wet_bulb_c
    }
}
