//! Aurora CLI - 命令行入口
//!
//! 纯前端，无业务逻辑。只负责参数解析和调用 API。

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};

mod config;
mod logging;
mod platform;
mod repl;

use crate::config::{apply_overrides, load_project_config, Overrides};
use crate::logging::{init_with_file, LogFormat};
use crate::platform::{print_error_with_source, write_tokens, OutputFormat};
use aurora_api::{lex, AuroraConfig, LogLevel, RunConfig};

const TARGET: &str = "aurora::cli";

#[derive(Parser)]
#[command(name = "aurora", about = "Aurora language front end", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// 项目配置文件 (默认: ./aurora.json，存在时读取)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 保留空白和换行 token
    #[arg(long, global = true)]
    raw: bool,

    /// 日志级别 (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// 全局日志级别
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Lexer 日志级别
    #[arg(long, global = true, value_enum)]
    log_lexer: Option<LogLevelArg>,

    /// 日志输出格式
    #[arg(long, global = true, value_enum, default_value = "compact")]
    format: LogFormatArg,

    /// 日志输出到文件
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of a source file
    Lex {
        /// 源文件路径
        file: PathBuf,

        /// Token 输出格式
        #[arg(long, value_enum, default_value = "text")]
        output: OutputArg,
    },
    /// Tokenize stdin line by line (default)
    Repl,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Off => LogLevel::Off,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let config = build_config(&cli);

    let format = match cli.format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    if let Err(e) = init_with_file(&config.log, format, cli.log_file.as_deref()) {
        eprintln!("Error: Cannot open log file: {}", e);
        process::exit(1);
    }
    debug!(target: TARGET, ?config, "configuration resolved");

    let run_config = RunConfig::from_project(&config);
    match cli.command.unwrap_or(Command::Repl) {
        Command::Lex { file, output } => {
            let format = match output {
                OutputArg::Text => OutputFormat::Text,
                OutputArg::Json => OutputFormat::Json,
            };
            handle_lex(&file, format, &run_config);
        }
        Command::Repl => handle_repl(&run_config),
    }
}

/// 读取项目文件并叠加命令行参数
fn build_config(cli: &Cli) -> AuroraConfig {
    let mut config = match load_project_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let overrides = Overrides {
        raw: cli.raw,
        verbose: cli.verbose,
        log_level: cli.log_level.map(LogLevel::from),
        log_lexer: cli.log_lexer.map(LogLevel::from),
    };
    apply_overrides(&mut config, &overrides);
    config
}

fn handle_lex(path: &Path, format: OutputFormat, config: &RunConfig) {
    let source = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: Cannot read file '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    info!(target: TARGET, file = %path.display(), bytes = source.len(), "lexing file");

    match lex(&source, config) {
        Ok(output) => {
            let stdout = io::stdout();
            if let Err(e) = write_tokens(&mut stdout.lock(), &output.records(), format) {
                eprintln!("Error: Cannot write tokens: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            print_error_with_source(&e, &String::from_utf8_lossy(&source));
            process::exit(1);
        }
    }
}

fn handle_repl(config: &RunConfig) {
    info!(target: TARGET, filtered = config.lexer.filter_trivia, "starting repl");
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::start(stdin.lock(), &mut stdout.lock(), config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
