mod dashboard;
mod login;
mod not_found;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;

use console_http::ClientError;
use serde_json::Value;

/// Collection payloads come back either as a bare array or wrapped
/// under `data` / `items`.
fn items(payload: &Value) -> &[Value] {
    let list = match payload {
        Value::Object(map) => map.get("data").or_else(|| map.get("items")),
        other => Some(other),
    };
    list.and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn error_text(err: &ClientError) -> String {
    err.user_message().unwrap_or_else(|| err.to_string())
}
