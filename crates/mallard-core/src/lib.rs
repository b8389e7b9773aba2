//! mallard-core
//!
//! Duck と飛行 strategy のコアモジュール。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（kind, behavior, duck, flock, errors）
//! - **ports**: 抽象化レイヤー（FlyBehavior, FlightLog）
//! - **impls**: 実装（SimpleFly, JetFly, StdoutFlightLog, MemoryFlightLog）
//! - **config**: roster ファイル（JSON）の読み込み

pub mod domain;
pub mod ports;
pub mod impls;
pub mod config;

pub use domain::{Duck, FlightBehavior, FlightBehaviorKind, FlightCounts, Flock, MallardError};
pub use ports::{FlightLog, FlyBehavior};
