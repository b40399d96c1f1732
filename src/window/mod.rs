//! Load window planning
//!
//! Computes the effective load mode and the `[from, to]` timestamp window
//! for a resource, honoring the per-resource `always_full` override.
//!
//! # Overview
//!
//! - Full loads span from the Unix epoch to the end of the day before the
//!   reference instant, so a load never includes the not-yet-complete
//!   current day.
//! - Incremental loads cover exactly the calendar day before the reference
//!   instant, regardless of when the run is actually triggered. There is no
//!   catch-up for skipped days; re-running with `full` is the recovery path.
//!
//! Day boundaries are computed in UTC.

use crate::catalog::ResourceDefinition;
use crate::error::{Error, Result};
use crate::types::LoadMode;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::info;


/// The effective window for one resource load.
///
/// Produced fresh per resource per run; never mutated after construction.
/// Invariant: `from <= to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWindow {
    /// Mode after applying the `always_full` override
    pub mode: LoadMode,
    /// Inclusive lower bound of the window
    pub from: DateTime<Utc>,
    /// Inclusive upper bound of the window
    pub to: DateTime<Utc>,
    /// Static filter clause carried from the resource definition
    pub filter_clause: String,
}

/// Compute the load window for a resource.
///
/// The `always_full` override takes precedence unconditionally: small
/// reference/dimension resources are reloaded in entirety even during
/// incremental runs.
///
/// Fails only with [`Error::InvalidResource`] when the resource name is
/// empty; the catalog's validation makes that unreachable in practice.
pub fn plan(
    resource: &ResourceDefinition,
    requested: LoadMode,
    reference: DateTime<Utc>,
) -> Result<LoadWindow> {
    if resource.name.is_empty() {
        return Err(Error::invalid_resource("resource name is empty"));
    }

    let mode = if resource.always_full() {
        if requested == LoadMode::Incremental {
            info!(
                resource = %resource.name,
                "always_full is set, overriding incremental to full load"
            );
        }
        LoadMode::Full
    } else {
        requested
    };

    let yesterday = (reference - Duration::days(1)).date_naive();
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).expect("valid hard-coded time");
    let to = yesterday.and_time(end_of_day).and_utc();

    let from = match mode {
        LoadMode::Full => DateTime::UNIX_EPOCH,
        LoadMode::Incremental => yesterday
            .and_time(NaiveTime::MIN)
            .and_utc(),
    };

    debug_assert!(from <= to);

    Ok(LoadWindow {
        mode,
        from,
        to,
        filter_clause: resource.filter_clause().to_string(),
    })
}
