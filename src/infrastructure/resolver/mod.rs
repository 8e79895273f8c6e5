//! Resolver client implementations.

mod cymru;

pub use cymru::CymruWhoisResolver;
