//! Typed boundary to the external on-chain game program.
//!
//! The authoritative rule engine (combat, production, research, accrual) is
//! not part of this repository; the client only consumes it through the
//! request/response shapes defined here.
//!
//! # Architecture
//!
//! ```text
//! GameChain (composite trait)
//!   └── GameProgram (typed program operations)
//!
//! LocalGameProgram (in-memory backend for offline play and tests)
//! ```
//!
//! A network-backed implementation would live in a sibling crate and submit
//! signed transactions; `LocalGameProgram` stands in for it by enforcing the
//! same observable rules in-process.

pub mod local;
pub mod traits;
pub mod types;

pub use local::LocalGameProgram;
pub use traits::{GameChain, GameProgram, ProgramError, TransportError};
pub use types::{GameSnapshot, PlayerSnapshot, RawUnit, ResourceBalances, TransactionId};
