//! Domain model (kind, behavior, duck, flock, errors).

pub mod kind;
pub mod behavior;
pub mod duck;
pub mod flock;
pub mod errors;

pub use self::kind::FlightBehaviorKind;
pub use self::behavior::FlightBehavior;
pub use self::duck::Duck;
pub use self::flock::{FlightCounts, Flock};
pub use self::errors::{ErrorKind, MallardError};
