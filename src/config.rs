use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::air::psychrometrics::STANDARD_PRESSURE_PA;
use crate::humidifier::performance::DEFAULT_AIR_DENSITY_KG_PER_M3;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 설계점 측정값. 대화형 입력의 기본값으로도 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignPoint {
    /// 단일 유닛 풍량 [m³/h]
    pub volumetric_flow_m3_per_h: f64,
    /// 입구 건구온도 [°C]
    pub inlet_temp_c: f64,
    /// 입구 상대습도 [%]
    pub inlet_rh_pct: f64,
    /// 출구 건구온도 [°C]
    pub outlet_temp_c: f64,
    /// 출구 상대습도 [%]. 없으면 등엔탈피로 복원한다.
    pub outlet_rh_pct: Option<f64>,
}

impl Default for DesignPoint {
    fn default() -> Self {
        Self {
            volumetric_flow_m3_per_h: 13_210.0,
            inlet_temp_c: 26.0,
            inlet_rh_pct: 50.0,
            outlet_temp_c: 19.0,
            outlet_rh_pct: None,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
///
/// `design_efficiency`는 설계점 계산 후 한 번 기록되고 이후 운전점 계산마다 읽힌다.
/// 값 자체에는 동기화가 없으므로 여러 스레드에서 공유하려면 호출 측에서 잠금을 둬야 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us/de-de)
    pub language: String,
    /// 대기압 [Pa]
    pub atmospheric_pressure_pa: f64,
    /// 건공기 밀도 [kg/m³]
    pub air_density_kg_per_m3: f64,
    /// 마지막 설계점 계산으로 얻은 포화 효율
    pub design_efficiency: Option<f64>,
    /// 전체 설비 풍량 [m³/h]
    pub total_volumetric_flow_m3_per_h: f64,
    /// 마지막 설계점 입력
    pub design: DesignPoint,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            atmospheric_pressure_pa: STANDARD_PRESSURE_PA,
            air_density_kg_per_m3: DEFAULT_AIR_DENSITY_KG_PER_M3,
            design_efficiency: None,
            total_volumetric_flow_m3_per_h: 39_630.0,
            design: DesignPoint::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 저장한 뒤 반환한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!("loaded configuration from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!("created default configuration at {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)?;
        info!("saved configuration to {}", path.display());
        Ok(())
    }

    /// 설계점 계산 결과를 기억한다.
    ///
    /// 효율은 설계점과 한 쌍이므로, 효율이 정의되지 않으면(포화 입구 등) 이전 효율도 지운다.
    /// 저장된 효율을 반환한다.
    pub fn remember_design(&mut self, design: DesignPoint, efficiency: f64) -> Option<f64> {
        self.design = design;
        self.design_efficiency = efficiency.is_finite().then_some(efficiency);
        self.design_efficiency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!(
            "humidifier_toolbox_cfg_{}.toml",
            std::process::id()
        ));
        let mut cfg = Config::default();
        cfg.remember_design(DesignPoint::default(), 0.95);
        cfg.language = "de-de".into();
        cfg.save_to(&path).expect("save");
        let loaded = load_or_default_from(&path).expect("load");
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("design_efficiency = 0.8\n").expect("parse");
        assert_eq!(cfg.design_efficiency, Some(0.8));
        assert_eq!(cfg.atmospheric_pressure_pa, STANDARD_PRESSURE_PA);
        assert_eq!(cfg.design, DesignPoint::default());
    }

    #[test]
    fn saturated_design_clears_previous_efficiency() {
        let mut cfg = Config::default();
        assert_eq!(cfg.remember_design(DesignPoint::default(), 0.9), Some(0.9));
        let saturated = DesignPoint {
            inlet_rh_pct: 100.0,
            ..DesignPoint::default()
        };
        assert_eq!(cfg.remember_design(saturated, f64::NAN), None);
        assert_eq!(cfg.design_efficiency, None);
        assert_eq!(cfg.design, saturated);
    }
}
