//! # Task Scheduling
//!
//! Fetches run as Dioxus tasks, so the same code path works on web and desktop.
//! A task lives on the UI thread and is dropped together with the scope that
//! spawned it, which is why a fetch that outlives its view never writes state.

use dioxus::prelude::spawn as dioxus_spawn;
use std::future::Future;

/// Spawn a fetch on the current scope, tagged with the getter's name in debug logs
pub fn spawn_fetch<F>(getter: &'static str, future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus_spawn(async move {
        tracing::debug!(getter, "fetch started");
        future.await;
        tracing::debug!(getter, "fetch settled");
    });
}
