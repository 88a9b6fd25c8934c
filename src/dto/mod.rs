//! DTOs de la API
//!
//! Este módulo contiene los tipos de request/response que viajan por HTTP.

pub mod order_dto;
