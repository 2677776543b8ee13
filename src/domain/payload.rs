use serde_json::Value;

/// The externally-supplied, untrusted representation of order contents.
///
/// A payload arrives either as an encoded string or as an already-structured
/// value of unknown shape. It is consumed once per normalization call and
/// never mutated. Absence at the boundary is modeled as `Option<RawPayload>`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// An encoded JSON string, not yet decoded.
    Text(String),
    /// A pre-structured value; passed through without decoding.
    Structured(Value),
}

impl RawPayload {
    /// True for the inputs the empty-input guard rejects outright: an empty
    /// string or a structured null.
    pub fn is_empty_input(&self) -> bool {
        match self {
            RawPayload::Text(text) => text.is_empty(),
            RawPayload::Structured(value) => value.is_null(),
        }
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_string_is_empty_input() {
        assert!(RawPayload::from("").is_empty_input());
        assert!(!RawPayload::from("[]").is_empty_input());
    }

    #[test]
    fn test_structured_null_is_empty_input() {
        assert!(RawPayload::from(Value::Null).is_empty_input());
        assert!(!RawPayload::from(json!([])).is_empty_input());
        assert!(!RawPayload::from(json!(0)).is_empty_input());
    }
}
