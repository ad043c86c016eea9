//! Fetch-on-mount helpers shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data is fetched only after hydration. On the server, futures are dropped
//! unpolled and every page renders its loading state.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;

/// State of one backend fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Remote<Vec<T>> {
    /// Ready items, or an empty slice while loading or failed.
    pub fn items(&self) -> &[T] {
        self.ready().map_or(&[], Vec::as_slice)
    }
}

/// Run a browser-side task. No-op during SSR.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

/// Reset `target` to loading, then store the outcome of `fetch`.
pub fn load_into<T, F>(target: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Remote::Loading);
    spawn(async move {
        let result = fetch.await;
        if let Err(err) = &result {
            leptos::logging::warn!("fetch failed: {err}");
        }
        target.set(Remote::from_result(result));
    });
}
