//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr，
//! stdout 只留给 token 输出。

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use aurora_config::{LogConfig, LogLevel, Phase};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Global level plus one override per phase target
pub fn build_targets(log_config: &LogConfig) -> Targets {
    Phase::ALL.iter().fold(
        Targets::new().with_default(level_filter(log_config.global)),
        |targets, phase| {
            targets.with_target(phase.target(), level_filter(log_config.level_for(*phase)))
        },
    )
}

/// 使用指定格式和日志配置初始化日志系统
///
/// With a log file, events go to both stderr and the file (appended, no ANSI).
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> io::Result<()> {
    let targets = build_targets(log_config);
    let mut layers = vec![create_format_layer(format, io::stderr, true, targets.clone())];

    if let Some(path) = file {
        let handle = OpenOptions::new().create(true).append(true).open(path)?;
        layers.push(create_format_layer(
            format,
            Mutex::new(handle),
            false,
            targets,
        ));
    }

    tracing_subscriber::registry().with(layers).init();
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W>(
    format: LogFormat,
    writer: W,
    ansi: bool,
    targets: Targets,
) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(targets)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(targets)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(writer)
            .with_filter(targets)
            .boxed(),
    }
}
