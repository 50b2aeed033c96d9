//! # Payload Validation
//!
//! Value objects are built from raw keyed-field payloads (JSON objects).
//! Presence of every required field is checked before any type check.

use crate::error::ValidationError;
use serde_json::{Map, Value};

/// Construction of a value object from a raw payload.
pub trait FromPayload: Sized {
    /// Code prefix used in `ValidationError`, e.g. `NEW_COMMENT`.
    const ENTITY: &'static str;

    fn from_payload(payload: &Value) -> Result<Self, ValidationError>;
}

/// Field reader bound to one entity's error codes.
pub struct Payload<'a> {
    entity: &'static str,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    /// A non-object payload carries no properties at all.
    pub fn new(entity: &'static str, payload: &'a Value) -> Self {
        Self { entity, fields: payload.as_object() }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(name))
    }

    /// Fails with `NOT_CONTAIN_NEEDED_PROPERTY` unless every name is present.
    /// Missing, `null` and empty-string values all count as absent.
    pub fn require(self, names: &[&str]) -> Result<Self, ValidationError> {
        let absent = names.iter().any(|name| match self.get(name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        });
        if absent {
            return Err(ValidationError::missing(self.entity));
        }
        Ok(self)
    }

    pub fn string(&self, name: &str) -> Result<String, ValidationError> {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(self.mismatch()),
        }
    }

    pub fn unsigned(&self, name: &str) -> Result<u64, ValidationError> {
        self.get(name)
            .and_then(Value::as_u64)
            .ok_or_else(|| self.mismatch())
    }

    /// An optional flag: absent means `false`, anything but a boolean is a mismatch.
    pub fn optional_flag(&self, name: &str) -> Result<bool, ValidationError> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.mismatch()),
        }
    }

    pub fn array(&self, name: &str) -> Result<&'a Vec<Value>, ValidationError> {
        self.get(name)
            .and_then(Value::as_array)
            .ok_or_else(|| self.mismatch())
    }

    pub fn mismatch(&self) -> ValidationError {
        ValidationError::mismatch(self.entity)
    }
}
