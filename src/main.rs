use std::path::PathBuf;

use clap::{Parser, Subcommand};
use humidifier_toolbox::config::{self, DesignPoint};
use humidifier_toolbox::{app, i18n};

/// 단열 가습기 성능 계산기.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 표시 언어 (auto/ko/en/de)
    #[arg(short = 'L', long, default_value = "auto", global = true)]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    /// 언어 팩 디렉터리 (<lang>.toml 로 문자열을 덮어쓴다)
    #[arg(long, default_value = "locales", global = true)]
    locales: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 설계점 계산: 출구 온도로 효율을 구하고 설정에 저장한다
    Design {
        /// 단일 유닛 풍량 [m³/h]
        #[arg(long)]
        flow: f64,
        /// 입구 온도 [°C]
        #[arg(long)]
        t_in: f64,
        /// 입구 상대습도 [%]
        #[arg(long)]
        rh_in: f64,
        /// 출구 온도 [°C]
        #[arg(long)]
        t_out: f64,
        /// 출구 상대습도 [%]. 생략하면 등엔탈피로 계산한다
        #[arg(long)]
        rh_out: Option<f64>,
        /// 전체 설비 풍량 [m³/h]
        #[arg(long)]
        total_flow: Option<f64>,
    },
    /// 운전점 계산: 효율(지정값 또는 저장된 설계 효율)로 출구 상태를 구한다
    Operate {
        /// 단일 유닛 풍량 [m³/h]
        #[arg(long)]
        flow: f64,
        /// 입구 온도 [°C]
        #[arg(long)]
        t_in: f64,
        /// 입구 상대습도 [%]
        #[arg(long)]
        rh_in: f64,
        /// 포화 효율 [%]. 생략하면 저장된 설계 효율을 쓴다
        #[arg(long)]
        efficiency: Option<f64>,
        /// 전체 설비 풍량 [m³/h]
        #[arg(long)]
        total_flow: Option<f64>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, &cli.locales);
    let outcome = match cli.command {
        None => app::run(&mut cfg, &cli.config, &tr),
        Some(Command::Design {
            flow,
            t_in,
            rh_in,
            t_out,
            rh_out,
            total_flow,
        }) => {
            let design = DesignPoint {
                volumetric_flow_m3_per_h: flow,
                inlet_temp_c: t_in,
                inlet_rh_pct: rh_in,
                outlet_temp_c: t_out,
                outlet_rh_pct: rh_out,
            };
            app::run_design(&mut cfg, &cli.config, &tr, design, total_flow).map(|_| ())
        }
        Some(Command::Operate {
            flow,
            t_in,
            rh_in,
            efficiency,
            total_flow,
        }) => {
            if let Some(total) = total_flow {
                cfg.total_volumetric_flow_m3_per_h = total;
            }
            app::run_operation(&cfg, &tr, flow, t_in, rh_in, efficiency.map(|e| e / 100.0))
                .map(|_| ())
        }
    };
    outcome.map_err(|e| format!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operate_accepts_efficiency_in_percent() {
        let cli = Cli::try_parse_from([
            "humidifier_toolbox",
            "operate",
            "--flow",
            "13210",
            "--t-in",
            "30",
            "--rh-in",
            "40",
            "--efficiency",
            "90",
        ])
        .expect("parse");
        match cli.command {
            Some(Command::Operate { efficiency, .. }) => assert_eq!(efficiency, Some(90.0)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn locales_dir_is_a_global_flag() {
        let cli = Cli::try_parse_from([
            "humidifier_toolbox",
            "design",
            "--flow",
            "13210",
            "--t-in",
            "26",
            "--rh-in",
            "50",
            "--t-out",
            "19",
            "--locales",
            "/tmp/packs",
        ])
        .expect("parse");
        assert_eq!(cli.locales, PathBuf::from("/tmp/packs"));
    }
}
