use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::config::{Config, DesignPoint};
use crate::humidifier::{scale_to_installation, ForwardInput, HumidifierModel};
use crate::i18n::{keys, resolve_language, Translator};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Design,
    Operation,
    Installation,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_DESIGN));
    println!("{}", tr.t(keys::MAIN_MENU_OPERATION));
    println!("{}", tr.t(keys::MAIN_MENU_INSTALLATION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Design),
            "2" => return Ok(MenuChoice::Operation),
            "3" => return Ok(MenuChoice::Installation),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 설계점 입력을 받는다. 엔터만 누르면 이전 값을 그대로 쓴다.
pub fn read_design_point(tr: &Translator, last: &DesignPoint) -> Result<DesignPoint, AppError> {
    println!("{}", tr.t(keys::DESIGN_HEADING));
    Ok(DesignPoint {
        volumetric_flow_m3_per_h: read_f64_or(
            tr,
            keys::PROMPT_FLOW,
            last.volumetric_flow_m3_per_h,
        )?,
        inlet_temp_c: read_f64_or(tr, keys::PROMPT_TEMP_IN, last.inlet_temp_c)?,
        inlet_rh_pct: read_f64_or(tr, keys::PROMPT_RH_IN, last.inlet_rh_pct)?,
        outlet_temp_c: read_f64_or(tr, keys::PROMPT_TEMP_OUT, last.outlet_temp_c)?,
        outlet_rh_pct: read_optional_f64(tr, keys::PROMPT_RH_OUT_OPTIONAL)?,
    })
}

/// 운전점 메뉴를 처리한다.
pub fn handle_operation(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OPERATION_HEADING));
    let flow = read_f64_or(tr, keys::PROMPT_FLOW, cfg.design.volumetric_flow_m3_per_h)?;
    let t_in = read_f64_or(tr, keys::PROMPT_TEMP_IN, cfg.design.inlet_temp_c)?;
    let rh_in = read_f64_or(tr, keys::PROMPT_RH_IN, cfg.design.inlet_rh_pct)?;
    let efficiency_pct = match cfg.design_efficiency {
        Some(eta) => read_f64_or(tr, keys::PROMPT_EFFICIENCY, eta * 100.0)?,
        None => {
            println!("{}", tr.t(keys::OPERATION_NO_DESIGN));
            read_f64(tr, &format!("{}: ", tr.t(keys::PROMPT_EFFICIENCY)))?
        }
    };
    app::run_operation(cfg, tr, flow, t_in, rh_in, Some(efficiency_pct / 100.0))?;
    Ok(())
}

/// 전체 설비 메뉴를 처리한다. 마지막 설계점 결과를 풍량비로 환산한다.
pub fn handle_installation(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INSTALLATION_HEADING));
    cfg.total_volumetric_flow_m3_per_h =
        read_f64_or(tr, keys::PROMPT_TOTAL_FLOW, cfg.total_volumetric_flow_m3_per_h)?;
    let design = cfg.design;
    let result = HumidifierModel::from_config(cfg).forward(ForwardInput {
        volumetric_flow_m3_per_h: design.volumetric_flow_m3_per_h,
        inlet_temp_c: design.inlet_temp_c,
        inlet_rh_pct: design.inlet_rh_pct,
        outlet_temp_c: design.outlet_temp_c,
        outlet_rh_pct: design.outlet_rh_pct,
    });
    let totals = scale_to_installation(
        &result,
        design.volumetric_flow_m3_per_h,
        cfg.total_volumetric_flow_m3_per_h,
    );
    println!("{}", report::render_totals(tr, totals.as_ref()));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "1" => {
            let code = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let code = code.trim();
            if code == "auto" {
                cfg.language = "auto".into();
            } else {
                cfg.language = resolve_language(code, None);
            }
        }
        "2" => {
            let p = read_f64_or(tr, keys::SETTINGS_PROMPT_PRESSURE, cfg.atmospheric_pressure_pa)?;
            if p > 0.0 {
                cfg.atmospheric_pressure_pa = p;
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
            }
        }
        "3" => {
            let rho = read_f64_or(tr, keys::SETTINGS_PROMPT_DENSITY, cfg.air_density_kg_per_m3)?;
            if rho > 0.0 {
                cfg.air_density_kg_per_m3 = rho;
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
            }
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 숫자 입력을 파싱한다. 독일식 소수점 쉼표도 허용한다.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse::<f64>().ok()
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_number(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    let prompt = format!(
        "{} ({} {}): ",
        tr.t(key),
        tr.t(keys::PROMPT_DEFAULT_HINT),
        report::format_number(default, 2, tr.language())
    );
    loop {
        let s = read_line(&prompt)?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match parse_number(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_optional_f64(tr: &Translator, key: &str) -> Result<Option<f64>, AppError> {
    let prompt = format!("{}: ", tr.t(key));
    loop {
        let s = read_line(&prompt)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match parse_number(&s) {
            Some(v) => return Ok(Some(v)),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn decimal_comma_is_accepted() {
        assert_eq!(parse_number("26,5"), Some(26.5));
        assert_eq!(parse_number(" 13210.5\n"), Some(13_210.5));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }
}
