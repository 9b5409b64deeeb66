//! Navigation menu assembly.
//!
//! Menu entries are flat, category-linked records maintained by the admin
//! side; this feature derives the filtered, ordered trees the storefront
//! renders. Two independent surfaces exist (main and secondary navigation),
//! partitioned by a flag on each entry.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::MenuService;
