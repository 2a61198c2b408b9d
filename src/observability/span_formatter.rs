//! OTLP JSON span formatter.
//!
//! Converts OpenTelemetry span data into the OTLP/JSON trace encoding, one
//! document per exported batch.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Formats span batches as OTLP JSON documents.
pub struct SpanFormatter {
    resource: Resource,
    /// Instrumentation scope name written with every batch.
    scope: &'static str,
}

impl SpanFormatter {
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    /// Formats a batch of spans as one OTLP JSON document.
    ///
    /// ```json
    /// {
    ///   "resourceSpans": [{
    ///     "resource": {
    ///       "attributes": [{"key": "service.name", "value": {"stringValue": "zemoji"}}]
    ///     },
    ///     "scopeSpans": [{
    ///       "scope": {"name": "zemoji"},
    ///       "spans": [...]
    ///     }]
    ///   }]
    /// }
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| json!({ "key": k.to_string(), "value": format_value(v) }))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": spans
                }]
            }]
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// IDs are lower-case hex, timestamps are decimal nanosecond strings, and the
/// parent ID is empty for root spans.
fn format_span(span: &SpanData) -> JsonValue {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (status_code, status_message) = format_status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": format_attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": format_attributes(&link.attributes),
    })
}

fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": format_value(&kv.value) }))
        .collect()
}

/// OTLP `AnyValue`; integers are strings and arrays fall back to their debug form.
fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

/// OTLP span kind: internal 1, server 2, client 3, producer 4, consumer 5.
const fn span_kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

/// OTLP status: unset 0, ok 1, error 2 with its description.
fn format_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

/// Nanoseconds since the Unix epoch as a decimal string, `"0"` before the epoch.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn values_use_otlp_encoding() {
        assert_eq!(format_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(format_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            format_value(&Value::from("Animals")),
            json!({ "stringValue": "Animals" })
        );
    }

    #[test]
    fn timestamps_are_nanosecond_strings() {
        let time = UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(unix_nanos(time), "1500000000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "zemoji")]);
        let formatter = SpanFormatter::new(resource, "zemoji");

        let doc = formatter.format_batch(&[]);

        let resource_spans = &doc["resourceSpans"][0];
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "zemoji");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
        let attributes = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "zemoji" }
        })));
    }
}
