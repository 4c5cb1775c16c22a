//! Field-presence wrapper for the full-update mode
//!
//! A JSON payload can omit a key, send an explicit `null`, or send a value.
//! `Option<T>` collapses the first two, which is exactly the distinction the
//! full-update mode needs: an omitted field is left untouched while an
//! explicit `null` clears the stored field. `Patch<T>` keeps all three
//! states apart.

use serde::{Deserialize, Deserializer};

/// Three-state presence wrapper for one updatable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key absent from the payload; the stored field is left untouched.
    Missing,
    /// Key present with an explicit null; the stored field is cleared.
    Null,
    /// Key present with a value; the stored field is overwritten.
    Value(T),
}

// Not derived: the derive would demand `T: Default` for no reason.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// Apply to a nullable slot: `Null` clears it to `None`.
    pub fn apply_nullable(self, slot: &mut Option<T>) {
        match self {
            Patch::Missing => {}
            Patch::Null => *slot = None,
            Patch::Value(value) => *slot = Some(value),
        }
    }

    /// Apply to a non-nullable slot with a schema default: `Null` resets
    /// the slot to `fallback` (0 for money, "Regional 2", "Hari", Open).
    pub fn apply_or(self, slot: &mut T, fallback: T) {
        match self {
            Patch::Missing => {}
            Patch::Null => *slot = fallback,
            Patch::Value(value) => *slot = value,
        }
    }

    /// Apply to a non-nullable slot whose schema default is `T::default()`.
    pub fn apply_or_default(self, slot: &mut T)
    where
        T: Default,
    {
        self.apply_or(slot, T::default());
    }
}

// A present key deserializes through Option<T>: null -> Null, value -> Value.
// Missing never reaches deserialize; it comes from #[serde(default)] on the
// containing struct.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Payload {
        name: Patch<String>,
        amount: Patch<i64>,
    }

    #[test]
    fn test_missing_key_is_missing() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.name, Patch::Missing);
        assert_eq!(payload.amount, Patch::Missing);
    }

    #[test]
    fn test_explicit_null_is_null() {
        let payload: Payload = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(payload.name, Patch::Null);
        assert_eq!(payload.amount, Patch::Missing);
    }

    #[test]
    fn test_value_is_value() {
        let payload: Payload =
            serde_json::from_str(r#"{"name": "Terminal Teluk Bayur", "amount": 12}"#).unwrap();
        assert_eq!(payload.name, Patch::Value("Terminal Teluk Bayur".to_string()));
        assert_eq!(payload.amount, Patch::Value(12));
    }

    #[test]
    fn test_apply_nullable() {
        let mut slot = Some("kept".to_string());
        Patch::Missing.apply_nullable(&mut slot);
        assert_eq!(slot.as_deref(), Some("kept"));

        Patch::Value("replaced".to_string()).apply_nullable(&mut slot);
        assert_eq!(slot.as_deref(), Some("replaced"));

        Patch::<String>::Null.apply_nullable(&mut slot);
        assert_eq!(slot, None);
    }

    #[test]
    fn test_apply_or_resets_to_fallback() {
        let mut slot = 7i64;
        Patch::Missing.apply_or(&mut slot, 0);
        assert_eq!(slot, 7);

        Patch::Null.apply_or(&mut slot, 0);
        assert_eq!(slot, 0);

        Patch::Value(42).apply_or(&mut slot, 0);
        assert_eq!(slot, 42);
    }
}
