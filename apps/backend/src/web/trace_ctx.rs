//! Task-local trace context for web requests.
//!
//! The `TraceSpan` middleware scopes every request future with its trace id so
//! that error responses and logs deep inside services can reach it without
//! threading the request through.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Get the trace_id for the current task.
/// Returns "unknown" outside of a request context (tests, CLI, background calls).
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
