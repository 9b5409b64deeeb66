//! Core domain logic for the storefront platform.
//!
//! This crate holds the payment-gateway signature codec and the navigation
//! menu assembler, together with their configuration and DTO surround.
//! Persistence, HTTP transport, authentication, and storage are external
//! collaborators: services here operate on caller-provided snapshots and
//! return derived values, so every call is pure and synchronous.

pub mod core;
pub mod features;
pub mod shared;
