//! FlyBehavior port - Duck が委譲する飛行 strategy
//!
//! # 設計原則
//! - 状態を持たない（unit struct で実装する）
//! - 失敗しない（戻り値なし、副作用は FlightLog への 1 行のみ）

use crate::domain::FlightBehaviorKind;
use crate::ports::FlightLog;

/// The flying capability a `Duck` delegates to.
///
/// Implementations are stateless; the only observable effect of `fly` is
/// writing `description()` as one line to the given log.
pub trait FlyBehavior: Send + Sync {
    /// Which selector value this strategy corresponds to.
    fn kind(&self) -> FlightBehaviorKind;

    /// The fixed text this strategy emits when flying.
    fn description(&self) -> &'static str;

    fn fly(&self, log: &dyn FlightLog) {
        log.record(self.description());
    }
}
