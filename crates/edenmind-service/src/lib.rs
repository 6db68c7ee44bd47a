//! Boundary crate for the remote plant diagnosis service.
//!
//! This crate owns the wire contract (`PlantInfo` in, `Diagnosis` out), the
//! [`DiagnosisService`] trait, tolerant decoding of raw service replies,
//! [`TextReplyService`] for transports that return reply text, and an
//! offline [`MockDiagnosisService`] used by tests and demos.

pub mod adapter;
pub mod client;
pub mod mock;
pub mod wire;

pub use adapter::{TextReplyService, TextTransport};
pub use client::*;
pub use mock::*;
pub use wire::*;
