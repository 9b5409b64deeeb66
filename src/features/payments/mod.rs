//! Payment gateway (VNPay) integration.
//!
//! Builds tamper-evident redirect URLs for outbound payment requests and
//! verifies the HMAC-SHA512 digest on inbound callbacks. The gateway's
//! canonicalization rule (ordinal key order, percent-encoding, `&`-joined
//! pairs) lives in [`services::SignatureService`]; the request/callback
//! field mapping lives in [`services::PaymentService`].
//!
//! The HTTP redirect itself and callback transport are owned by the web
//! layer; this feature only shapes and signs data.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::{PaymentService, SignatureService};
