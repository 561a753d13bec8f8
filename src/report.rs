//! 계산 결과를 사람이 읽는 문자열로 만든다.
//!
//! 온도/백분율은 소수 1자리, 습도비/엔탈피/가습량은 2자리로 고정한다.
//! 유한하지 않은 값(NaN, ±∞)은 `--`로 표시한다.

use crate::air::AirState;
use crate::humidifier::{InstallationTotals, PerformanceWarning, ProcessResult};
use crate::i18n::{keys, Language, Translator};

/// 값이 없을 때 표시하는 자리표시자.
pub const PLACEHOLDER: &str = "--";

/// 언어별 소수점/천 단위 구분자.
fn separators(lang: Language) -> (char, char) {
    match lang {
        Language::De => (',', '.'),
        Language::En | Language::Ko => ('.', ','),
    }
}

/// 숫자를 고정 소수 자릿수와 언어별 구분자로 포맷한다.
pub fn format_number(value: f64, decimals: usize, lang: Language) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let (decimal_sep, group_sep) = separators(lang);
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }

    // 반올림 결과가 0이면 부호를 붙이지 않는다
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(frac);
    }
    out
}

fn line(tr: &Translator, key: &str, value: f64, decimals: usize, unit: &str) -> String {
    format!(
        "  {:<24} {} {unit}",
        tr.t(key),
        format_number(value, decimals, tr.language())
    )
}

/// 상태점 하나를 여러 줄로 표시한다.
pub fn render_state(tr: &Translator, title_key: &str, state: &AirState) -> String {
    [
        format!("[{}]", tr.t(title_key)),
        line(tr, keys::REPORT_TEMPERATURE, state.temperature_c, 1, "°C"),
        line(tr, keys::REPORT_RH, state.relative_humidity_pct, 1, "%"),
        line(
            tr,
            keys::REPORT_HUMIDITY_RATIO,
            state.humidity_ratio_g_per_kg,
            2,
            "g/kg",
        ),
        line(tr, keys::REPORT_ENTHALPY, state.enthalpy_kj_per_kg, 2, "kJ/kg"),
        line(tr, keys::REPORT_WET_BULB, state.wet_bulb_c, 1, "°C"),
        line(tr, keys::REPORT_DEW_POINT, state.dew_point_c, 1, "°C"),
    ]
    .join("\n")
}

/// 단일 유닛 결과(입출구 상태 + 효율/가습량/열량)를 표시한다.
pub fn render_process(tr: &Translator, result: &ProcessResult) -> String {
    [
        render_state(tr, keys::REPORT_INLET, &result.state_in),
        render_state(tr, keys::REPORT_OUTLET, &result.state_out),
        line(tr, keys::REPORT_EFFICIENCY, result.efficiency * 100.0, 1, "%"),
        line(tr, keys::REPORT_WATER, result.water_rate_l_per_h, 2, "l/h"),
        line(tr, keys::REPORT_POWER, result.power_kw, 1, "kW"),
    ]
    .join("\n")
}

/// 설비 합계를 표시한다. 풍량비를 정의할 수 없으면 자리표시자를 쓴다.
pub fn render_totals(tr: &Translator, totals: Option<&InstallationTotals>) -> String {
    let (ratio, water, power) = match totals {
        Some(t) => (t.flow_ratio, t.water_total_l_per_h, t.power_total_kw),
        None => (f64::NAN, f64::NAN, f64::NAN),
    };
    [
        line(tr, keys::REPORT_FLOW_RATIO, ratio, 2, ""),
        line(tr, keys::REPORT_TOTAL_WATER, water, 2, "l/h"),
        line(tr, keys::REPORT_TOTAL_POWER, power, 1, "kW"),
    ]
    .join("\n")
}

/// 주의 사항 메시지 키.
pub fn warning_key(warning: PerformanceWarning) -> &'static str {
    match warning {
        PerformanceWarning::InletSupersaturated => keys::WARN_INLET_SUPERSATURATED,
        PerformanceWarning::EfficiencyUndefined => keys::WARN_EFFICIENCY_UNDEFINED,
        PerformanceWarning::EfficiencyAboveUnity => keys::WARN_EFFICIENCY_ABOVE_UNITY,
        PerformanceWarning::OutletSupersaturated => keys::WARN_OUTLET_SUPERSATURATED,
        PerformanceWarning::NegativeWaterRate => keys::WARN_NEGATIVE_WATER,
    }
}

/// 주의 사항을 한 줄씩 표시한다.
pub fn render_warnings(tr: &Translator, warnings: &[PerformanceWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("  ! {}", tr.t(warning_key(*w))))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_grouping_and_decimal_comma() {
        assert_eq!(format_number(13_210.0, 2, Language::De), "13.210,00");
        assert_eq!(format_number(1_234_567.891, 1, Language::En), "1,234,567.9");
    }

    #[test]
    fn nan_and_infinity_render_placeholder() {
        assert_eq!(format_number(f64::NAN, 1, Language::Ko), PLACEHOLDER);
        assert_eq!(format_number(f64::INFINITY, 2, Language::En), PLACEHOLDER);
    }

    #[test]
    fn negative_values_keep_sign_unless_rounded_to_zero() {
        assert_eq!(format_number(-2.46, 1, Language::En), "-2.5");
        assert_eq!(format_number(-0.001, 2, Language::De), "0,00");
        assert_eq!(format_number(-999.96, 1, Language::En), "-1,000.0");
    }

    #[test]
    fn zero_decimals_has_no_separator() {
        assert_eq!(format_number(950.4, 0, Language::De), "950");
    }

    #[test]
    fn undefined_totals_show_placeholder() {
        let tr = Translator::new("en");
        let text = render_totals(&tr, None);
        assert!(text.contains("-- l/h"));
        assert!(text.contains("-- kW"));
    }
}
