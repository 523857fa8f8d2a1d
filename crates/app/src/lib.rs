//! # duskswitch-app
//!
//! Application layer — the theme controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — read & write the persisted preference
//!   - `Document` — marker classes on the root/body nodes and the toggle icon
//! - Define the **driving/inbound** use-case: `ThemeController`
//!   (`init`, `on_ready`, `toggle`, `current`)
//! - Own the runtime configuration (`ThemeConfig`)
//!
//! ## Dependency rule
//! Depends on `duskswitch-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod controller;
pub mod ports;
