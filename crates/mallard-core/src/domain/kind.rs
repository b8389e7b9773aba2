//! FlightBehaviorKind - Duck 生成時に選ぶ飛行方法
//!
//! 型付きの値は常に `Simple` か `Jet` のどちらか。
//! 文字列や数値などの未検証入力は `FromStr` / `TryFrom<u8>` を通し、
//! 範囲外の値は `MallardError::InvalidArgument` で拒否します（デフォルトにはしない）。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::MallardError;

/// Selector for the flight strategy a `Duck` owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FlightBehaviorKind {
    Simple,
    Jet,
}

impl FlightBehaviorKind {
    /// The full declared domain, in declaration order.
    pub const ALL: [FlightBehaviorKind; 2] = [FlightBehaviorKind::Simple, FlightBehaviorKind::Jet];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightBehaviorKind::Simple => "simple",
            FlightBehaviorKind::Jet => "jet",
        }
    }
}

impl fmt::Display for FlightBehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightBehaviorKind {
    type Err = MallardError;

    /// `simple` / `jet`（大文字小文字は無視）と `SimpleFly` / `JetFly` を受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("simple") || trimmed.eq_ignore_ascii_case("simplefly") {
            Ok(FlightBehaviorKind::Simple)
        } else if trimmed.eq_ignore_ascii_case("jet") || trimmed.eq_ignore_ascii_case("jetfly") {
            Ok(FlightBehaviorKind::Jet)
        } else {
            tracing::warn!(value = s, "rejected unknown flight kind");
            Err(MallardError::invalid_argument("flight", s))
        }
    }
}

impl TryFrom<String> for FlightBehaviorKind {
    type Error = MallardError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl TryFrom<u8> for FlightBehaviorKind {
    type Error = MallardError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(FlightBehaviorKind::Simple),
            1 => Ok(FlightBehaviorKind::Jet),
            other => {
                tracing::warn!(discriminant = other, "rejected out-of-range flight kind");
                Err(MallardError::invalid_argument("flight", other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case::lower("simple", FlightBehaviorKind::Simple)]
    #[case::upper("JET", FlightBehaviorKind::Jet)]
    #[case::padded("  jet\n", FlightBehaviorKind::Jet)]
    #[case::variant_name_simple("SimpleFly", FlightBehaviorKind::Simple)]
    #[case::variant_name_jet("JetFly", FlightBehaviorKind::Jet)]
    fn parses_known_names(#[case] input: &str, #[case] expected: FlightBehaviorKind) {
        assert_eq!(input.parse::<FlightBehaviorKind>().unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::unknown("rocket")]
    #[case::prefix("sim")]
    fn rejects_unknown_names(#[case] input: &str) {
        let err = input.parse::<FlightBehaviorKind>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn discriminants_cover_the_declared_domain() {
        assert_eq!(FlightBehaviorKind::try_from(0u8).unwrap(), FlightBehaviorKind::Simple);
        assert_eq!(FlightBehaviorKind::try_from(1u8).unwrap(), FlightBehaviorKind::Jet);

        let err = FlightBehaviorKind::try_from(2u8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn display_and_parse_agree() {
        for kind in FlightBehaviorKind::ALL {
            assert_eq!(kind.to_string().parse::<FlightBehaviorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let s = serde_json::to_string(&FlightBehaviorKind::Jet).unwrap();
        assert_eq!(s, "\"jet\"");
    }

    #[rstest]
    #[case::canonical("\"simple\"", FlightBehaviorKind::Simple)]
    #[case::variant_name("\"JetFly\"", FlightBehaviorKind::Jet)]
    fn deserializes_with_the_same_spellings_as_parse(
        #[case] json: &str,
        #[case] expected: FlightBehaviorKind,
    ) {
        let kind: FlightBehaviorKind = serde_json::from_str(json).unwrap();
        assert_eq!(kind, expected);
    }

    #[test]
    fn deserialize_rejects_unknown_kind() {
        let err = serde_json::from_str::<FlightBehaviorKind>("\"rocket\"").unwrap_err();
        assert!(err.to_string().contains("rocket"));
    }
}
