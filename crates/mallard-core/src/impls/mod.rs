//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **SimpleFly** / **JetFly**: FlyBehavior の 2 つの variant
//! - **StdoutFlightLog**: 本番用（標準出力）
//! - **MemoryFlightLog**: テスト用（メモリに記録）

pub mod simple_fly;
pub mod jet_fly;
pub mod flight_log;

pub use self::simple_fly::SimpleFly;
pub use self::jet_fly::JetFly;
pub use self::flight_log::{MemoryFlightLog, StdoutFlightLog};
