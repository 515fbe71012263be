use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pipe_pressure_drop::app::{self, AppError, CalcValues};
use pipe_pressure_drop::config::{self, DEFAULT_CONFIG_PATH};
use pipe_pressure_drop::conversion;
use pipe_pressure_drop::ui_cli;
use pipe_pressure_drop::units::{FlowUnit, LengthUnit, PressureUnit, ViscosityUnit};

/// Darcy-Weisbach / Colebrook-White 배관 압력손실 계산기
#[derive(Parser)]
#[command(name = "pipe_pressure_drop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pipe friction pressure loss calculator", long_about = None)]
struct Cli {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 한 번 계산하고 결과를 출력
    Calc(CalcArgs),
    /// 단위 변환
    Convert {
        /// 물리량 (length, pressure, velocity, viscosity, flow)
        quantity: String,
        value: f64,
        from: String,
        to: String,
    },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

/// 생략한 값은 입력 양식 기본값을 쓴다.
#[derive(Args)]
struct CalcArgs {
    /// 체적 유량
    #[arg(long)]
    flow: Option<f64>,
    /// 배관 내경
    #[arg(long)]
    diameter: Option<f64>,
    /// 유체 밀도 [kg/m3]
    #[arg(long)]
    density: Option<f64>,
    /// 동점도
    #[arg(long)]
    viscosity: Option<f64>,
    /// 절대 거칠기
    #[arg(long)]
    roughness: Option<f64>,
    /// 배관 길이
    #[arg(long)]
    length: Option<f64>,

    #[arg(long, value_parser = conversion::parse_flow_unit)]
    flow_unit: Option<FlowUnit>,
    #[arg(long, value_parser = conversion::parse_length_unit)]
    diameter_unit: Option<LengthUnit>,
    #[arg(long, value_parser = conversion::parse_length_unit)]
    roughness_unit: Option<LengthUnit>,
    #[arg(long, value_parser = conversion::parse_length_unit)]
    length_unit: Option<LengthUnit>,
    #[arg(long, value_parser = conversion::parse_viscosity_unit)]
    viscosity_unit: Option<ViscosityUnit>,
    /// 결과 압력 단위
    #[arg(long, value_parser = conversion::parse_pressure_unit)]
    pressure_unit: Option<PressureUnit>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("로그 초기화 실패: {e}");
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Some(Commands::Convert {
            quantity,
            value,
            from,
            to,
        }) => {
            let kind = conversion::parse_quantity(&quantity)?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
            Ok(())
        }
        Some(Commands::Calc(args)) => {
            let mut cfg = config::load_or_default(&cli.config)?;
            run_calc(&mut cfg, args)
        }
        Some(Commands::Interactive) | None => {
            let mut cfg = config::load_or_default(&cli.config)?;
            app::run(&mut cfg, &cli.config)
        }
    }
}

fn run_calc(cfg: &mut config::Config, args: CalcArgs) -> Result<(), AppError> {
    // 명령행 단위 지정은 이번 실행에만 적용하고 저장하지 않는다.
    let units = &mut cfg.default_units;
    if let Some(u) = args.flow_unit {
        units.flow = u;
    }
    if let Some(u) = args.diameter_unit {
        units.diameter = u;
    }
    if let Some(u) = args.roughness_unit {
        units.roughness = u;
    }
    if let Some(u) = args.length_unit {
        units.length = u;
    }
    if let Some(u) = args.viscosity_unit {
        units.viscosity = u;
    }
    if let Some(u) = args.pressure_unit {
        units.pressure = u;
    }

    let defaults = CalcValues::form_defaults(units);
    let values = CalcValues {
        flow: args.flow.unwrap_or(defaults.flow),
        diameter: args.diameter.unwrap_or(defaults.diameter),
        density_kg_per_m3: args.density.unwrap_or(defaults.density_kg_per_m3),
        viscosity: args.viscosity.unwrap_or(defaults.viscosity),
        roughness: args.roughness.unwrap_or(defaults.roughness),
        length: args.length.unwrap_or(defaults.length),
    };
    let (input, result) = app::calculate(&values, cfg)?;
    ui_cli::print_result(&input, &result, &cfg.default_units);
    Ok(())
}
