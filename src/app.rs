use std::path::Path;

use log::{info, warn};

use crate::config::{Config, DesignPoint};
use crate::humidifier::{
    diagnose, scale_to_installation, ForwardInput, HumidifierModel, InverseInput, ProcessResult,
};
use crate::i18n::{self, Translator};
use crate::report;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 운전점 계산에 필요한 설계 효율이 없음
    MissingDesignEfficiency,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::MissingDesignEfficiency => write!(
                f,
                "설계 효율이 없습니다. 먼저 설계점을 계산하거나 --efficiency 를 지정하세요"
            ),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Design => {
                let design = ui_cli::read_design_point(tr, &config.design)?;
                run_design(config, config_path, tr, design, None)?;
            }
            MenuChoice::Operation => ui_cli::handle_operation(tr, config)?,
            MenuChoice::Installation => {
                ui_cli::handle_installation(tr, config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 설계점(순방향)을 계산해 출력하고, 얻은 효율을 설정에 저장한다.
pub fn run_design(
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
    design: DesignPoint,
    total_flow_m3_per_h: Option<f64>,
) -> Result<ProcessResult, AppError> {
    let model = HumidifierModel::from_config(config);
    let result = model.forward(ForwardInput {
        volumetric_flow_m3_per_h: design.volumetric_flow_m3_per_h,
        inlet_temp_c: design.inlet_temp_c,
        inlet_rh_pct: design.inlet_rh_pct,
        outlet_temp_c: design.outlet_temp_c,
        outlet_rh_pct: design.outlet_rh_pct,
    });
    if let Some(total) = total_flow_m3_per_h {
        config.total_volumetric_flow_m3_per_h = total;
    }
    print_with_totals(tr, config, &result, design.volumetric_flow_m3_per_h);

    let stored = config.remember_design(design, result.efficiency);
    config.save_to(config_path)?;
    match stored {
        Some(eta) => {
            info!("design efficiency {eta} persisted");
            println!(
                "{} {} %",
                tr.t(i18n::keys::REPORT_EFFICIENCY_SAVED),
                report::format_number(eta * 100.0, 1, tr.language())
            );
        }
        None => warn!("design efficiency undefined, stored value cleared"),
    }
    Ok(result)
}

/// 운전점(역방향)을 계산해 출력한다.
///
/// 효율을 지정하지 않으면 설정에 저장된 설계 효율을 사용한다.
pub fn run_operation(
    config: &Config,
    tr: &Translator,
    volumetric_flow_m3_per_h: f64,
    inlet_temp_c: f64,
    inlet_rh_pct: f64,
    efficiency: Option<f64>,
) -> Result<ProcessResult, AppError> {
    let efficiency = efficiency
        .or(config.design_efficiency)
        .ok_or(AppError::MissingDesignEfficiency)?;
    let model = HumidifierModel::from_config(config);
    let result = model.inverse(InverseInput {
        volumetric_flow_m3_per_h,
        inlet_temp_c,
        inlet_rh_pct,
        efficiency,
    });
    print_with_totals(tr, config, &result, volumetric_flow_m3_per_h);
    Ok(result)
}

fn print_with_totals(
    tr: &Translator,
    config: &Config,
    result: &ProcessResult,
    single_flow_m3_per_h: f64,
) {
    println!("{}", report::render_process(tr, result));
    let totals = scale_to_installation(
        result,
        single_flow_m3_per_h,
        config.total_volumetric_flow_m3_per_h,
    );
    println!("{}", report::render_totals(tr, totals.as_ref()));
    let warnings = diagnose(result);
    if !warnings.is_empty() {
        println!("{}", report::render_warnings(tr, &warnings));
    }
}
