//! Repositories module
//!
//! Este módulo contiene el registro en memoria de órdenes de mantenimiento.

pub mod order_repository;
