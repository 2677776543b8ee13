use crate::domain::item::ValidatedItem;
use crate::domain::order::NormalizedOrder;
use crate::domain::payload::RawPayload;
use crate::error::NormalizeFailure;
use serde_json::Value;

/// Converts an untrusted payload into a validated, total-computed order.
///
/// Never fails outward: every structural failure degrades to the canonical
/// empty order, and the caller cannot tell which guard fired. The failure
/// kind is logged before it is flattened so telemetry can still tell the
/// guards apart.
///
/// Pure function: no shared state, no I/O, safe to call repeatedly from
/// independent call sites.
pub fn normalize(raw: Option<&RawPayload>) -> NormalizedOrder {
    match try_normalize(raw) {
        Ok(order) => order,
        Err(failure) => {
            log::debug!("order payload rejected: {failure}");
            NormalizedOrder::empty()
        }
    }
}

/// The guard chain. The first failing guard short-circuits the rest.
fn try_normalize(raw: Option<&RawPayload>) -> crate::error::Result<NormalizedOrder> {
    // Guard 1: absent or empty input.
    let raw = raw.ok_or(NormalizeFailure::EmptyInput)?;
    if raw.is_empty_input() {
        return Err(NormalizeFailure::EmptyInput);
    }

    // Guard 2: strings must decode; structured values pass through as-is.
    let decoded: Value = match raw {
        RawPayload::Text(text) => serde_json::from_str(text)?,
        RawPayload::Structured(value) => value.clone(),
    };

    // Guard 3: the decoded value must be a sequence.
    let candidates = match decoded {
        Value::Array(candidates) => candidates,
        other => return Err(NormalizeFailure::ShapeFailure(json_type_name(&other))),
    };

    // Item filter: malformed elements are discarded silently and never
    // affect their siblings.
    let kept: Vec<ValidatedItem> = candidates
        .iter()
        .filter_map(ValidatedItem::from_candidate)
        .collect();

    Ok(NormalizedOrder::from_items(kept))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
