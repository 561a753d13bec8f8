//! 설계 효율 저장 → 운전점 계산 흐름 테스트.
use humidifier_toolbox::app::{self, AppError};
use humidifier_toolbox::config::{self, Config, DesignPoint};
use humidifier_toolbox::i18n::Translator;

#[test]
fn operation_without_design_efficiency_is_rejected() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let res = app::run_operation(&cfg, &tr, 13_210.0, 30.0, 40.0, None);
    assert!(matches!(res, Err(AppError::MissingDesignEfficiency)));
}

#[test]
fn design_run_persists_efficiency_for_operation() {
    let path = std::env::temp_dir().join(format!(
        "humidifier_toolbox_session_{}.toml",
        std::process::id()
    ));
    let tr = Translator::new("de");
    let mut cfg = Config::default();
    let design = DesignPoint::default();
    let fwd = app::run_design(&mut cfg, &path, &tr, design, Some(26_420.0)).expect("design");

    let reloaded = config::load_or_default_from(&path).expect("reload");
    let _ = std::fs::remove_file(&path);
    assert_eq!(reloaded.design_efficiency, Some(fwd.efficiency));
    assert_eq!(reloaded.total_volumetric_flow_m3_per_h, 26_420.0);

    let inv = app::run_operation(
        &reloaded,
        &tr,
        design.volumetric_flow_m3_per_h,
        design.inlet_temp_c,
        design.inlet_rh_pct,
        None,
    )
    .expect("operation");
    assert!((inv.state_out.temperature_c - design.outlet_temp_c).abs() < 1e-6);
}

#[test]
fn saturated_redesign_clears_stored_efficiency() {
    let path = std::env::temp_dir().join(format!(
        "humidifier_toolbox_redesign_{}.toml",
        std::process::id()
    ));
    let tr = Translator::new("en");
    let mut cfg = Config::default();
    let fwd = app::run_design(&mut cfg, &path, &tr, DesignPoint::default(), None).expect("design");
    assert_eq!(cfg.design_efficiency, Some(fwd.efficiency));

    let saturated = DesignPoint {
        inlet_temp_c: 30.0,
        inlet_rh_pct: 100.0,
        outlet_temp_c: 30.0,
        outlet_rh_pct: None,
        ..DesignPoint::default()
    };
    let sat = app::run_design(&mut cfg, &path, &tr, saturated, None).expect("saturated design");
    let reloaded = config::load_or_default_from(&path).expect("reload");
    let _ = std::fs::remove_file(&path);
    assert!(sat.efficiency.is_nan());
    assert_eq!(reloaded.design_efficiency, None);
    assert_eq!(reloaded.design, saturated);

    let res = app::run_operation(&reloaded, &tr, 13_210.0, 30.0, 40.0, None);
    assert!(matches!(res, Err(AppError::MissingDesignEfficiency)));
}
