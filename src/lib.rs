//! Accessible cascading menu engine.
//!
//! [`engine`] holds the host-independent state machine: a recursive item
//! tree, per-list key handling and the signals that bubble from nested lists
//! to the root. Hosts drive it through a [`engine::FocusPort`]. The `ui`
//! module is the terminal host used by the `menutree` binary.

pub mod config;
pub mod engine;
pub mod store;
pub mod ui;
