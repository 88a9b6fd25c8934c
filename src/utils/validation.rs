//! Utilidades de validación
//!
//! Este módulo contiene la validación y normalización de los campos de
//! contacto de una orden: documento fiscal y teléfono.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref TAX_ID_RE: Regex = Regex::new(r"^(\d{3}) (\d{3}) (\d{3}) (\d{2})$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^(\d{2}) (\d) (\d{4}) (\d{4})$").unwrap();
}

/// Validar y formatear un documento fiscal: `xxx xxx xxx xx` -> `xxx.xxx.xxx-xx`
pub fn format_tax_id(value: &str) -> Result<String, ValidationError> {
    match TAX_ID_RE.captures(value) {
        Some(caps) => Ok(format!("{}.{}.{}-{}", &caps[1], &caps[2], &caps[3], &caps[4])),
        None => {
            let mut error = ValidationError::new("tax_id");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"xxx xxx xxx xx".to_string());
            Err(error)
        }
    }
}

/// Validar y formatear un teléfono: `xx x xxxx xxxx` -> `(xx) x xxxx-xxxx`
pub fn format_phone(value: &str) -> Result<String, ValidationError> {
    match PHONE_RE.captures(value) {
        Some(caps) => Ok(format!("({}) {} {}-{}", &caps[1], &caps[2], &caps[3], &caps[4])),
        None => {
            let mut error = ValidationError::new("phone");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"xx x xxxx xxxx".to_string());
            Err(error)
        }
    }
}

/// Validar rango de coordenadas GPS
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if lat < -90.0 || lat > 90.0 {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if lng < -180.0 || lng > 180.0 {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}
