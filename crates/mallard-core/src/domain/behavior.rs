//! FlightBehavior - Duck が所有する飛行 strategy
//!
//! `FlyBehavior` の実装を閉じた enum で包みます。
//! `FlightBehaviorKind` からの変換は網羅的な `match` なので、
//! variant を追加するとコンパイルエラーで漏れに気付けます。

use super::FlightBehaviorKind;
use crate::impls::{JetFly, SimpleFly};
use crate::ports::{FlightLog, FlyBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightBehavior {
    Simple(SimpleFly),
    Jet(JetFly),
}

impl FlightBehavior {
    /// Select the concrete strategy for `kind`. Total over the enum.
    pub fn for_kind(kind: FlightBehaviorKind) -> Self {
        match kind {
            FlightBehaviorKind::Simple => FlightBehavior::Simple(SimpleFly::new()),
            FlightBehaviorKind::Jet => FlightBehavior::Jet(JetFly::new()),
        }
    }

    fn strategy(&self) -> &dyn FlyBehavior {
        match self {
            FlightBehavior::Simple(s) => s,
            FlightBehavior::Jet(j) => j,
        }
    }
}

impl From<FlightBehaviorKind> for FlightBehavior {
    fn from(kind: FlightBehaviorKind) -> Self {
        Self::for_kind(kind)
    }
}

impl FlyBehavior for FlightBehavior {
    fn kind(&self) -> FlightBehaviorKind {
        self.strategy().kind()
    }

    fn description(&self) -> &'static str {
        self.strategy().description()
    }

    fn fly(&self, log: &dyn FlightLog) {
        self.strategy().fly(log)
    }
}
