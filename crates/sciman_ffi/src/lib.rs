//! FFI crate exposing the roster core to the mobile UI.

pub mod api;
