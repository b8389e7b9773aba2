//! FlightLog の実装
//!
//! # 学習ポイント
//! - `&self` の trait メソッドから書き込むための Mutex（内部可変性）
//! - lock が poison されても記録済みの行は取り出せる（`into_inner`）

use crate::ports::FlightLog;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// 標準出力に 1 行ずつ書く
///
/// 書き込みに失敗しても（閉じた pipe など）panic せず、warn ログだけ残す。
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutFlightLog;

impl StdoutFlightLog {
    pub fn new() -> Self {
        Self
    }
}

impl FlightLog for StdoutFlightLog {
    fn record(&self, line: &str) {
        write_line(&mut io::stdout().lock(), line);
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
        tracing::warn!(error = %e, "failed to write flight line");
    }
}

/// メモリに記録する（テスト用）
///
/// # 使用例
/// ```
/// use mallard_core::impls::MemoryFlightLog;
/// use mallard_core::{Duck, FlightBehaviorKind};
///
/// let log = MemoryFlightLog::new();
/// Duck::new("Donald", FlightBehaviorKind::Simple).fly_into(&log);
/// assert_eq!(log.lines(), vec!["Simple Fly".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryFlightLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryFlightLog {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// 記録済みの行のスナップショット
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FlightLog for MemoryFlightLog {
    fn record(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
