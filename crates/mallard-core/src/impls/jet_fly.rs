//! JetFly - ジェットで飛ぶ

use crate::domain::FlightBehaviorKind;
use crate::ports::FlyBehavior;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JetFly;

impl JetFly {
    pub fn new() -> Self {
        Self
    }
}

impl FlyBehavior for JetFly {
    fn kind(&self) -> FlightBehaviorKind {
        FlightBehaviorKind::Jet
    }

    fn description(&self) -> &'static str {
        "Jet Fly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::MemoryFlightLog;

    #[test]
    fn test_jet_fly() {
        let log = MemoryFlightLog::new();
        JetFly::new().fly(&log);
        assert_eq!(log.lines(), vec!["Jet Fly".to_string()]);
    }
}
