use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codehunter_core::{detect_all, detect_encoding, OutputFormat, SessionConfig};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

mod session;

use session::{run_session, write_json};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(
    name = "codehunter",
    version,
    about = "Guess and decode Base64/Hex/Binary/URL/ROT13/Morse text"
)]
struct Cli {
    /// 会话配置文件（TOML），默认 ./codehunter.toml（不存在则用内置默认值）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志（等价于 RUST_LOG=debug）
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 检测并解码一段文本后退出
    Detect {
        /// 待检测文本（允许以 '-' 开头，便于直接输入摩尔斯码）
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,

        /// 列出所有命中的检测器（按优先级）
        #[arg(long)]
        all: bool,
    },
    /// 交互模式（默认）
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = SessionConfig::load(cli.config.as_deref()).context("load session config")?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Detect { text, json, all } => {
            let json = json || cfg.output == OutputFormat::Json;
            print_detection(&mut out, &text, json, all).context("write detection result")?;
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let stats = run_session(&mut input, &mut out, &cfg)
                .context("interactive session failed")?;
            info!(
                lines_analyzed = stats.lines_analyzed,
                detected = stats.detected,
                redecoded = stats.redecoded,
                "session finished"
            );
        }
    }

    out.flush().context("flush stdout")?;
    Ok(())
}

/// 单次检测输出
fn print_detection<W: Write>(out: &mut W, text: &str, json: bool, all: bool) -> Result<()> {
    if all {
        let results = detect_all(text);
        if json {
            serde_json::to_writer(&mut *out, &results)?;
            writeln!(out)?;
        } else if results.is_empty() {
            writeln!(out, "No known encoding detected.")?;
        } else {
            for r in &results {
                writeln!(out, "{}: '{}'", r.label(), r.decoded)?;
            }
        }
        return Ok(());
    }

    let result = detect_encoding(text);
    if json {
        write_json(out, &result)?;
    } else if result.is_unknown() {
        writeln!(out, "No known encoding detected.")?;
        writeln!(out, "Original text: '{}'", result.decoded)?;
    } else {
        writeln!(out, "Detection: {}", result.label())?;
        writeln!(out, "Decoded text: '{}'", result.decoded)?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写 stderr，避免与交互输出混在一起；RUST_LOG 优先，其次 --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
