//! 交互会话：逐行读取输入、检测并打印结果，可选再解码一次
use anyhow::Result;
use codehunter_core::{detect_encoding, redecode, DetectionResult, OutputFormat, SessionConfig};
use std::io::{BufRead, Write};
use tracing::debug;

const BANNER_WIDTH: usize = 50;

/// 会话统计信息（结束时打日志）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub lines_analyzed: usize,
    pub detected: usize,
    pub redecoded: usize,
}

/// 运行交互循环，直到遇到退出词或输入结束（EOF）
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &SessionConfig,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();

    loop {
        write!(out, "\nEnter text to decode (or 'quit' to exit): ")?;
        out.flush()?;
        let line = match read_line(input)? {
            Some(l) => l,
            None => break,
        };
        let text = line.trim();
        if cfg.is_quit_word(text) {
            break;
        }
        stats.lines_analyzed += 1;

        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(out, "\n{banner}")?;
        writeln!(out, "Analysis for: '{text}'")?;
        writeln!(out, "{banner}")?;

        let result = detect_encoding(text);
        if result.is_unknown() {
            match cfg.output {
                OutputFormat::Json => write_json(out, &result)?,
                OutputFormat::Text => {
                    writeln!(out, "\nNo known encoding detected.")?;
                    writeln!(out, "Original text: '{text}'")?;
                }
            }
            continue;
        }

        stats.detected += 1;
        match cfg.output {
            OutputFormat::Json => write_json(out, &result)?,
            OutputFormat::Text => {
                writeln!(out, "\nDetection: {}", result.label())?;
                writeln!(out, "Decoded text: '{}'", result.decoded)?;
            }
        }

        if !cfg.offer_redecode {
            continue;
        }
        write!(out, "\nWould you like to try decoding the result again? (y/n) ")?;
        out.flush()?;
        let answer = match read_line(input)? {
            Some(a) => a,
            None => break,
        };
        if !answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y") {
            continue;
        }
        // 仅一层：结果没有变化时不输出
        if let Some(next) = redecode(&result) {
            stats.redecoded += 1;
            match cfg.output {
                OutputFormat::Json => write_json(out, &next)?,
                OutputFormat::Text => {
                    writeln!(out, "\nResult after re-decoding: '{}'", next.decoded)?
                }
            }
        } else {
            debug!("re-decode produced no change");
        }
    }

    Ok(stats)
}

/// 读取一行；EOF 返回 None
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

pub(crate) fn write_json<W: Write>(out: &mut W, result: &DetectionResult) -> Result<()> {
    serde_json::to_writer(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
