//! Controllers module
//!
//! Los controllers validan la entrada, hablan con el registro y arman
//! las responses de la API.

pub mod order_controller;
