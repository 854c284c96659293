//! Python bindings for vtsim (enabled with the `python` feature).

pub mod bindings;
pub mod numpy_bridge;
