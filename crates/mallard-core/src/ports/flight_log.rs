//! FlightLog port - 飛行の出力先の抽象化
//!
//! # テスト容易性
//! - trait により出力先を差し替え可能
//! - 本番は StdoutFlightLog、テストでは MemoryFlightLog を使用

/// FlightLog は飛行の説明を 1 行ずつ受け取る
///
/// `&self` で受けるので、メモリ実装は内部で Mutex を使う。
pub trait FlightLog: Send + Sync {
    fn record(&self, line: &str);
}
