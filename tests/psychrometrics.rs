//! 습공기 선도 함수 회귀 테스트.
use humidifier_toolbox::air::psychrometrics::{
    clamp_relative_humidity_pct, dew_point_c, enthalpy_kj_per_kg, humidity_ratio_from_enthalpy,
    humidity_ratio_g_per_kg, relative_humidity_pct, saturation_pressure_pa, wet_bulb_c,
    STANDARD_PRESSURE_PA,
};
use humidifier_toolbox::air::AirState;

const P: f64 = STANDARD_PRESSURE_PA;

#[test]
fn saturation_pressure_matches_reference_points() {
    // 20°C ≈ 2.33 kPa, 30°C ≈ 4.23 kPa
    assert!((saturation_pressure_pa(20.0) - 2332.6).abs() < 0.5);
    assert!((saturation_pressure_pa(30.0) - 4233.7).abs() < 0.5);
}

#[test]
fn relative_humidity_roundtrip() {
    for t in (0..=50).step_by(5) {
        for rh in (5..=100).step_by(5) {
            let (t, rh) = (t as f64, rh as f64);
            let x = humidity_ratio_g_per_kg(t, rh, P);
            let back = relative_humidity_pct(t, x, P);
            assert!((back - rh).abs() < 1e-6, "T={t} RH={rh} -> {back}");
        }
    }
}

#[test]
fn clamped_relative_humidity_never_exceeds_saturation() {
    for x in [5.0, 10.0, 20.0, 40.0] {
        for t in [0.0, 10.0, 20.0, 30.0] {
            let rh = clamp_relative_humidity_pct(relative_humidity_pct(t, x, P));
            assert!(rh <= 100.0, "T={t} x={x} rh={rh}");
        }
    }
}

#[test]
fn enthalpy_inverse_recovers_humidity_ratio() {
    let h = enthalpy_kj_per_kg(24.0, 9.3);
    assert!((humidity_ratio_from_enthalpy(h, 24.0) - 9.3).abs() < 1e-9);
}

#[test]
fn wet_bulb_lies_between_dew_point_and_dry_bulb() {
    for t in [5.0, 15.0, 26.0, 35.0, 45.0] {
        for rh in [10.0, 30.0, 50.0, 80.0, 95.0] {
            let x = humidity_ratio_g_per_kg(t, rh, P);
            let tdp = dew_point_c(x, P);
            let twb = wet_bulb_c(t, x, P);
            assert!(tdp <= twb && twb <= t, "T={t} RH={rh}: Tdp={tdp} Twb={twb}");
        }
    }
}

#[test]
fn saturated_air_has_equal_temperatures() {
    for t in [5.0, 20.0, 35.0] {
        let state = AirState::from_temperature_rh(t, 100.0, P);
        assert!((state.dew_point_c - t).abs() < 1e-6, "Tdp={}", state.dew_point_c);
        assert!((state.wet_bulb_c - t).abs() < 1e-6, "Twb={}", state.wet_bulb_c);
    }
}

#[test]
fn wet_bulb_saturated_enthalpy_matches_state() {
    let x = humidity_ratio_g_per_kg(32.0, 40.0, P);
    let twb = wet_bulb_c(32.0, x, P);
    let h_sat = enthalpy_kj_per_kg(twb, humidity_ratio_g_per_kg(twb, 100.0, P));
    // 15회 이분법 분해능으로 엔탈피 오차는 0.01 kJ/kg 이내
    assert!((h_sat - enthalpy_kj_per_kg(32.0, x)).abs() < 0.01);
}

#[test]
fn reference_state_26c_50pct() {
    let state = AirState::from_temperature_rh(26.0, 50.0, P);
    assert!((state.humidity_ratio_g_per_kg - 10.466).abs() < 0.01);
    assert!((state.enthalpy_kj_per_kg - 52.84).abs() < 0.01);
    assert!((state.wet_bulb_c - 18.64).abs() < 0.01);
    assert!((state.dew_point_c - 14.77).abs() < 0.01);
}

#[test]
fn lower_pressure_holds_more_water() {
    let sea = humidity_ratio_g_per_kg(25.0, 50.0, P);
    let high = humidity_ratio_g_per_kg(25.0, 50.0, 80_000.0);
    assert!(high > sea);
}

#[test]
fn nan_input_propagates() {
    let state = AirState::from_temperature_rh(f64::NAN, 50.0, P);
    assert!(state.humidity_ratio_g_per_kg.is_nan());
    assert!(state.enthalpy_kj_per_kg.is_nan());
    assert!(state.wet_bulb_c.is_nan());
    assert!(state.dew_point_c.is_nan());
}

#[test]
fn inlet_rh_above_saturation_passes_through() {
    let state = AirState::from_temperature_rh(20.0, 104.0, P);
    assert_eq!(state.relative_humidity_pct, 104.0);
    // 이슬점이 건구온도보다 높아 구간이 뒤집히면 건구온도를 반환
    assert_eq!(state.wet_bulb_c, 20.0);
}
