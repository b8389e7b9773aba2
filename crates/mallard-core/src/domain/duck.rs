//! Duck - 飛行方法を strategy に委譲するエンティティ
//!
//! # 不変条件
//! - 生成後に behavior は変わらない（mutator を公開しない）
//! - behavior は常にどれか 1 つの variant（`Option` にしない）

use super::{FlightBehavior, FlightBehaviorKind, MallardError};
use crate::impls::StdoutFlightLog;
use crate::ports::{FlightLog, FlyBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duck {
    name: String,
    behavior: FlightBehavior,
}

impl Duck {
    /// Create a duck that flies with the strategy selected by `kind`.
    pub fn new(name: impl Into<String>, kind: FlightBehaviorKind) -> Self {
        let name = name.into();
        tracing::debug!(duck = %name, flight = %kind, "duck created");
        Self {
            name,
            behavior: FlightBehavior::for_kind(kind),
        }
    }

    /// Create a duck from an untyped flight kind (e.g. read from a file).
    ///
    /// # Errors
    /// `MallardError::InvalidArgument` if `raw` is not a known flight kind.
    pub fn from_raw_kind(name: impl Into<String>, raw: &str) -> Result<Self, MallardError> {
        let kind = raw.parse()?;
        Ok(Self::new(name, kind))
    }

    /// Create a duck from an enum discriminant (`0` = simple, `1` = jet).
    ///
    /// # Errors
    /// `MallardError::InvalidArgument` for any other value.
    pub fn from_discriminant(name: impl Into<String>, raw: u8) -> Result<Self, MallardError> {
        let kind = FlightBehaviorKind::try_from(raw)?;
        Ok(Self::new(name, kind))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FlightBehaviorKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &FlightBehavior {
        &self.behavior
    }

    /// Fly, writing the description to stdout.
    pub fn fly(&self) {
        self.fly_into(&StdoutFlightLog);
    }

    /// Fly, writing the description to `log`.
    pub fn fly_into(&self, log: &dyn FlightLog) {
        tracing::trace!(duck = %self.name, flight = %self.kind(), "flying");
        self.behavior.fly(log);
    }
}
