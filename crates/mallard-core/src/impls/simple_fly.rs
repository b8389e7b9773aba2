//! SimpleFly - 普通に羽ばたく

use crate::domain::FlightBehaviorKind;
use crate::ports::FlyBehavior;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleFly;

impl SimpleFly {
    pub fn new() -> Self {
        Self
    }
}

impl FlyBehavior for SimpleFly {
    fn kind(&self) -> FlightBehaviorKind {
        FlightBehaviorKind::Simple
    }

    fn description(&self) -> &'static str {
        "Simple Fly"
    }
}
