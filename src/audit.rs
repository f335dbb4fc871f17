use serde_json::Value;
use uuid::Uuid;

/// Emit a structured audit event for a state-changing operation. Events go to
/// the `audit` tracing target so subscribers can route them separately.
pub fn log_audit(user_id: Option<Uuid>, action: &str, resource: Option<&str>, metadata: Option<Value>) {
    tracing::info!(
        target: "audit",
        user_id = %user_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata.unwrap_or(serde_json::Value::Null),
        "audit event"
    );
}
