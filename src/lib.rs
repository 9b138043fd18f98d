//! Device classification from a User-Agent string plus client-side probe
//! signals (viewport size, touch capability).
//!
//! The core is [`classify`]: a total, stateless function that combines the
//! parsed User-Agent with the probe readings and returns an immutable
//! [`Classification`]. UA parsing sits behind the [`UaParser`] trait;
//! [`UaSniffer`] is the built-in YAML-rule implementation.

mod classifier;
mod error;
mod helpers;
mod literal;
mod parser;
mod rules;
mod sniffer;
mod types;
mod ua_parser;

pub use classifier::classify;
pub use error::{Error, Result};
pub use sniffer::UaSniffer;
pub use types::*;
pub use ua_parser::{UaParser, UaProfile};
