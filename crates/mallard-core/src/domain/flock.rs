//! Flock - 複数の Duck をまとめて飛ばす

use serde::Serialize;

use super::{Duck, FlightBehaviorKind, MallardError};
use crate::config::FlockConfig;
use crate::ports::FlightLog;

/// Number of flights per strategy, as reported by `Flock::fly_all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlightCounts {
    pub simple: usize,
    pub jet: usize,
}

impl FlightCounts {
    pub fn record(&mut self, kind: FlightBehaviorKind) {
        match kind {
            FlightBehaviorKind::Simple => self.simple += 1,
            FlightBehaviorKind::Jet => self.jet += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.simple + self.jet
    }

    pub fn to_json(&self) -> Result<String, MallardError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// An ordered group of ducks.
#[derive(Debug, Clone, Default)]
pub struct Flock {
    ducks: Vec<Duck>,
}

impl Flock {
    pub fn new() -> Self {
        Self { ducks: Vec::new() }
    }

    /// Build every duck listed in `config`.
    ///
    /// The first entry with an unknown flight kind aborts the whole roster.
    pub fn from_config(config: &FlockConfig) -> Result<Self, MallardError> {
        let ducks = config
            .ducks
            .iter()
            .map(|entry| Duck::from_raw_kind(entry.name.clone(), &entry.flight))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ducks })
    }

    pub fn push(&mut self, duck: Duck) {
        self.ducks.push(duck);
    }

    pub fn len(&self) -> usize {
        self.ducks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ducks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Duck> {
        self.ducks.iter()
    }

    /// Fly every duck in order.
    pub fn fly_all(&self, log: &dyn FlightLog) -> FlightCounts {
        let mut counts = FlightCounts::default();
        for duck in &self.ducks {
            duck.fly_into(log);
            counts.record(duck.kind());
        }
        tracing::info!(simple = counts.simple, jet = counts.jet, "flock flew");
        counts
    }
}

impl FromIterator<Duck> for Flock {
    fn from_iter<I: IntoIterator<Item = Duck>>(iter: I) -> Self {
        Self {
            ducks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuckConfig;
    use crate::domain::ErrorKind;
    use crate::impls::MemoryFlightLog;

    fn roster(entries: &[(&str, &str)]) -> FlockConfig {
        FlockConfig {
            ducks: entries
                .iter()
                .map(|(name, flight)| DuckConfig {
                    name: name.to_string(),
                    flight: flight.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn new_flock_is_empty() {
        let flock = Flock::new();
        assert!(flock.is_empty());
        assert_eq!(flock.fly_all(&MemoryFlightLog::new()), FlightCounts::default());
    }

    #[test]
    fn fly_all_flies_in_order_and_counts() {
        let flock: Flock = [
            Duck::new("Donald", FlightBehaviorKind::Simple),
            Duck::new("Jetson", FlightBehaviorKind::Jet),
            Duck::new("Daisy", FlightBehaviorKind::Simple),
        ]
        .into_iter()
        .collect();
        let log = MemoryFlightLog::new();

        let counts = flock.fly_all(&log);

        assert_eq!(log.lines(), vec!["Simple Fly", "Jet Fly", "Simple Fly"]);
        assert_eq!(counts, FlightCounts { simple: 2, jet: 1 });
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn from_config_builds_every_duck() {
        let flock = Flock::from_config(&roster(&[("Donald", "simple"), ("Jetson", "JET")])).unwrap();

        let names: Vec<_> = flock.iter().map(Duck::name).collect();
        assert_eq!(names, vec!["Donald", "Jetson"]);
        assert_eq!(flock.len(), 2);
    }

    #[test]
    fn from_config_rejects_unknown_kind() {
        let err = Flock::from_config(&roster(&[("Donald", "simple"), ("Scrooge", "rocket")]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn counts_serialize_as_object() {
        let v = serde_json::to_value(FlightCounts { simple: 1, jet: 2 }).unwrap();
        assert_eq!(v, serde_json::json!({ "simple": 1, "jet": 2 }));
    }

    #[test]
    fn counts_to_json_is_compact() {
        let json = FlightCounts { simple: 1, jet: 1 }.to_json().unwrap();
        assert_eq!(json, r#"{"simple":1,"jet":1}"#);
    }
}
