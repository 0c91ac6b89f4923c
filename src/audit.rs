use serde_json::Value;
use uuid::Uuid;

/// Emit a structured activity event for a state-changing operation. The
/// storefront keeps no audit table; events go to the `activity` log target
/// where the deployment's log pipeline picks them up.
pub fn record(user_id: Option<Uuid>, action: &str, resource: Option<&str>, metadata: Option<Value>) {
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        target: "activity",
        user_id = user_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata,
    );
}
