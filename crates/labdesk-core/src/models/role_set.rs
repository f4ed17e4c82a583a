use crate::RoleKey;

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Boolean role map over the closed [`RoleKey`] set.
///
/// Keys absent from the map read as `false`; the wire representation is a
/// plain JSON object of role-key to boolean.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeMap<RoleKey, bool>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every known role explicitly set to `false`. Seeds the create form.
    pub fn all_false() -> Self {
        Self(RoleKey::ALL.iter().map(|k| (*k, false)).collect())
    }

    /// Coerce an arbitrary raw JSON value into a boolean role map.
    ///
    /// Unknown keys are dropped; non-boolean values follow JSON truthiness
    /// (null, false, 0, "" are false, everything else is true). Any non-object
    /// input yields an empty set.
    pub fn coerce(raw: &Value) -> Self {
        let Some(map) = raw.as_object() else {
            return Self::new();
        };

        let mut roles = BTreeMap::new();
        for (key, value) in map {
            if let Ok(role) = RoleKey::from_str(key) {
                roles.insert(role, is_truthy(value));
            }
        }
        Self(roles)
    }

    pub fn is_granted(&self, role: RoleKey) -> bool {
        self.0.get(&role).copied().unwrap_or(false)
    }

    pub fn grant(&mut self, role: RoleKey) {
        self.0.insert(role, true);
    }

    pub fn revoke(&mut self, role: RoleKey) {
        self.0.insert(role, false);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Roles currently granted, in stable key order.
    pub fn granted(&self) -> Vec<RoleKey> {
        self.0
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(role, _)| *role)
            .collect()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
