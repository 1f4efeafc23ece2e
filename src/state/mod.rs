//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `signin`, `toast`) so individual
//! components can depend on small focused models. Each model is a plain
//! struct provided app-wide as an `RwSignal` via context.

pub mod session;
pub mod signin;
pub mod toast;
