//! Ports - 抽象化レイヤー
//!
//! Duck が依存する振る舞いを trait として定義します。
//! 具体的な実装は `impls` に置きます。

pub mod fly;
pub mod flight_log;

pub use self::fly::FlyBehavior;
pub use self::flight_log::FlightLog;
