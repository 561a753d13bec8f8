//! 습공기 선도 기본 함수 모음.
//!
//! 모든 함수는 순수 함수이며, 대기압은 호출마다 인자로 받는다.
//! 물리적으로 불가능한 상태(과포화, 음의 습도비 등)는 오류 대신 NaN 으로 표현하여
//! 이후 계산에 그대로 전파되도록 한다.

use log::trace;

/// 표준 대기압 [Pa]
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

/// 물/건공기 분자량비에 g/kg 환산을 곱한 계수 (0.622 * 1000)
const MOLAR_RATIO_G_PER_KG: f64 = 622.0;

/// Magnus 식 계수 (물 위, Sonntag 1990)
const MAGNUS_C0_PA: f64 = 611.2;
const MAGNUS_A: f64 = 17.62;
const MAGNUS_B_C: f64 = 243.12;

/// 건공기 정압비열 [kJ/kg·K]
pub const CP_DRY_AIR: f64 = 1.006;
/// 수증기 정압비열 [kJ/kg·K]
pub const CP_VAPOR: f64 = 1.86;
/// 0°C 기준 증발잠열 [kJ/kg]
pub const LATENT_HEAT_0C: f64 = 2501.0;

/// 습구온도 이분법의 구간 폭이 이 값보다 작으면 건구온도를 그대로 반환한다.
pub const WET_BULB_DEGENERATE_WIDTH_C: f64 = 0.01;
/// 습구온도 이분법 반복 횟수. 결과 재현성을 위해 수렴 판정 없이 고정한다.
/// 최종 오차는 (T - Tdp) / 2^16 이하이다.
pub const WET_BULB_ITERATIONS: usize = 15;

/// 포화수증기압 [Pa] (Magnus 식).
///
/// 0~60°C 범위에서 사용한다. T → -243.12°C 에서 발산한다.
pub fn saturation_pressure_pa(temperature_c: f64) -> f64 {
    MAGNUS_C0_PA * (MAGNUS_A * temperature_c / (MAGNUS_B_C + temperature_c)).exp()
}

/// 건구온도와 상대습도로 습도비 [g/kg]를 계산한다.
///
/// x = 622 * pw / (p - pw), pw = RH/100 * Ps(T).
/// 수증기 분압이 전압 이상이면 NaN 을 반환한다.
pub fn humidity_ratio_g_per_kg(
    temperature_c: f64,
    relative_humidity_pct: f64,
    pressure_pa: f64,
) -> f64 {
    let pw = relative_humidity_pct / 100.0 * saturation_pressure_pa(temperature_c);
    let denominator = pressure_pa - pw;
    if denominator <= 0.0 {
        return f64::NAN;
    }
    MOLAR_RATIO_G_PER_KG * pw / denominator
}

/// 습도비로부터 수증기 분압 [Pa]을 계산한다.
pub fn vapor_partial_pressure_pa(x_g_per_kg: f64, pressure_pa: f64) -> f64 {
    pressure_pa * x_g_per_kg / (MOLAR_RATIO_G_PER_KG + x_g_per_kg)
}

/// 건구온도와 습도비로 상대습도 [%]를 계산한다.
///
/// 대수적 역함수 그대로이므로 비물리적인 (T, x) 조합에서는 100 을 넘을 수 있다.
/// 표시용 값은 [`clamp_relative_humidity_pct`]를 거친다.
pub fn relative_humidity_pct(temperature_c: f64, x_g_per_kg: f64, pressure_pa: f64) -> f64 {
    100.0 * vapor_partial_pressure_pa(x_g_per_kg, pressure_pa)
        / saturation_pressure_pa(temperature_c)
}

/// 상대습도를 포화 상한(100%)으로 제한한다. NaN 은 NaN 으로 남는다.
pub fn clamp_relative_humidity_pct(relative_humidity_pct: f64) -> f64 {
    // f64::min 은 NaN 을 삼키므로 비교로 처리
    if relative_humidity_pct > 100.0 {
        100.0
    } else {
        relative_humidity_pct
    }
}

/// 습공기 비엔탈피 [kJ/kg 건공기].
pub fn enthalpy_kj_per_kg(temperature_c: f64, x_g_per_kg: f64) -> f64 {
    CP_DRY_AIR * temperature_c
        + (x_g_per_kg / 1000.0) * (LATENT_HEAT_0C + CP_VAPOR * temperature_c)
}

/// 비엔탈피와 건구온도로 습도비 [g/kg]를 역산한다.
pub fn humidity_ratio_from_enthalpy(enthalpy_kj_per_kg: f64, temperature_c: f64) -> f64 {
    1000.0 * (enthalpy_kj_per_kg - CP_DRY_AIR * temperature_c)
        / (LATENT_HEAT_0C + CP_VAPOR * temperature_c)
}

/// 습도비로부터 이슬점 온도 [°C]를 계산한다 (Magnus 식의 역함수).
///
/// 수증기 분압이 0 이하(x <= 0)이면 NaN.
pub fn dew_point_c(x_g_per_kg: f64, pressure_pa: f64) -> f64 {
    let pw = vapor_partial_pressure_pa(x_g_per_kg, pressure_pa);
    if !(pw > 0.0) {
        return f64::NAN;
    }
    let ln_ratio = (pw / MAGNUS_C0_PA).ln();
    MAGNUS_B_C * ln_ratio / (MAGNUS_A - ln_ratio)
}

/// 습구온도 [°C].
///
/// 폐형해가 없으므로 [이슬점, 건구온도] 구간에서 이분법으로 구한다.
/// 구간 중점의 포화 엔탈피가 실제 상태 엔탈피보다 작으면 해는 중점 위에 있다.
/// 구간 폭이 0.01°C 미만이면(RH≈100%) 건구온도를 그대로 돌려준다.
pub fn wet_bulb_c(temperature_c: f64, x_g_per_kg: f64, pressure_pa: f64) -> f64 {
    let target = enthalpy_kj_per_kg(temperature_c, x_g_per_kg);
    let mut low = dew_point_c(x_g_per_kg, pressure_pa);
    let mut high = temperature_c;
    if high - low < WET_BULB_DEGENERATE_WIDTH_C {
        trace!("wet bulb bracket degenerate at T={temperature_c}, returning dry bulb");
        return temperature_c;
    }
    for _ in 0..WET_BULB_ITERATIONS {
        let mid = (low + high) / 2.0;
        let x_sat = humidity_ratio_g_per_kg(mid, 100.0, pressure_pa);
        if enthalpy_kj_per_kg(mid, x_sat) < target {
            low = mid;
        } else {
            high = mid;
        }
    }
    trace!("wet bulb bracket [{low}, {high}] after {WET_BULB_ITERATIONS} iterations");
    (low + high) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation_pressure_at_zero_is_magnus_constant() {
        assert!((saturation_pressure_pa(0.0) - 611.2).abs() < 1e-9);
    }

    #[test]
    fn clamp_keeps_nan() {
        assert!(clamp_relative_humidity_pct(f64::NAN).is_nan());
        assert_eq!(clamp_relative_humidity_pct(104.2), 100.0);
        assert_eq!(clamp_relative_humidity_pct(55.0), 55.0);
    }

    #[test]
    fn supersaturated_partial_pressure_is_nan() {
        // 수증기 분압이 전압을 넘는 조건
        assert!(humidity_ratio_g_per_kg(30.0, 100.0, 3_000.0).is_nan());
    }

    #[test]
    fn wet_bulb_bisects_between_dew_point_and_dry_bulb() {
        let x = humidity_ratio_g_per_kg(26.0, 50.0, STANDARD_PRESSURE_PA);
        let twb = wet_bulb_c(26.0, x, STANDARD_PRESSURE_PA);
        assert!((twb - 18.64).abs() < 0.01, "Twb={twb}");
    }

    #[test]
    fn dew_point_of_dry_air_is_nan() {
        assert!(dew_point_c(0.0, STANDARD_PRESSURE_PA).is_nan());
        assert!(dew_point_c(-1.0, STANDARD_PRESSURE_PA).is_nan());
    }
}
