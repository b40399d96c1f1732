//! Request building
//!
//! Turns a resource name, a load window, and a credential into a fully
//! specified HTTP request descriptor. Pure transformation, no I/O.

use crate::types::WriteDisposition;
use crate::window::LoadWindow;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use std::collections::HashMap;


/// Timestamp format used for the `from_date` / `to_date` query parameters
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A fully specified request for one resource load.
///
/// Constructed once per resource per run, consumed immediately by the
/// fetch step, then discarded.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Resource this request loads; doubles as the destination table name
    pub resource: String,
    /// Absolute request URL
    pub url: String,
    /// Request headers, including the Authorization credential
    pub headers: HashMap<String, String>,
    /// Query parameters derived from the load window
    pub query: HashMap<String, String>,
    /// How the destination table is written
    pub write_disposition: WriteDisposition,
}

/// Build the request descriptor for one resource load.
///
/// The credential is treated as opaque and only base64-encoded into a
/// Basic Authorization header. The destination is always replaced, full
/// and incremental loads alike.
pub fn build(
    base_url: &str,
    credential: &str,
    resource_name: &str,
    window: &LoadWindow,
) -> RequestDescriptor {
    let mut headers = HashMap::new();
    headers.insert(
        "Authorization".to_string(),
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credential)
        ),
    );
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let mut query = HashMap::new();
    query.insert("where".to_string(), window.filter_clause.clone());
    query.insert("from_date".to_string(), format_timestamp(window.from));
    query.insert("to_date".to_string(), format_timestamp(window.to));

    RequestDescriptor {
        resource: resource_name.to_string(),
        url: base_url.to_string(),
        headers,
        query,
        write_disposition: WriteDisposition::Replace,
    }
}

/// Format a window bound for the wire
fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(DATE_FORMAT).to_string()
}
