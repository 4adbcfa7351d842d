//! # Data Getter Hooks
//!
//! This module holds the fetch lifecycle behind every decorated view. It can also
//! be used directly from a component that wants the lifecycle without the
//! loading/child switch.
//!
//! ## Lifecycle
//!
//! - **Mount**: seed the state from the default state (if any) and fetch once
//! - **Argument change**: fetch again only when the change keys differ from the
//!   previous render; without a selector, never
//! - **Manual refetch**: [`Refetch`] fetches with the current or overridden arguments
//! - **Failure**: logged as `fetch failed: <error>`, state untouched
//!
//! Overlapping fetches are not sequenced: whichever resolves last wins.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_data_getter::prelude::*;
//!
//! #[component]
//! fn Greeting(name: String) -> Element {
//!     let getter = use_hook(|| {
//!         DataGetter::new(|name: String| async move { Ok::<_, FetchError>(format!("Hello, {name}")) })
//!             .when_changes(|name| vec![name.clone()])
//!     });
//!     let greeting = use_data_getter(&getter, name);
//!
//!     match greeting.data() {
//!         Some(text) => rsx! { p { "{text}" } },
//!         None => rsx! { p { "..." } },
//!     }
//! }
//! ```

use dioxus::prelude::*;
use tracing::{debug, error};

use crate::{getter::DataGetter, platform::spawn_fetch, state::DataState};

/// The refetch capability injected into children
///
/// `Copy` and cheap to pass around. Calling it never puts the view back into the
/// loading state; the previous result stays until the new one arrives.
pub struct Refetch<A: 'static> {
    callback: Callback<Option<A>>,
}

impl<A: 'static> Refetch<A> {
    /// Fetch again with the arguments of the most recent render
    pub fn call(&self) {
        self.callback.call(None);
    }

    /// Fetch again with the given arguments instead
    pub fn call_with(&self, args: A) {
        self.callback.call(Some(args));
    }
}

impl<A: 'static> Clone for Refetch<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for Refetch<A> {}

impl<A: 'static> PartialEq for Refetch<A> {
    fn eq(&self, other: &Self) -> bool {
        self.callback == other.callback
    }
}

impl<A: 'static> std::fmt::Debug for Refetch<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refetch").finish_non_exhaustive()
    }
}

/// What [`use_data_getter`] hands back to the component
pub struct DataHandle<A: 'static, R: 'static> {
    state: Signal<DataState<R>>,
    refetch: Refetch<A>,
}

impl<A: 'static, R: Clone + 'static> DataHandle<A, R> {
    /// The latest result, subscribing the caller to changes
    pub fn data(&self) -> Option<R> {
        self.state.read().data().cloned()
    }

    /// Returns true while no result is available
    pub fn is_absent(&self) -> bool {
        self.state.read().is_absent()
    }

    /// The underlying state signal
    pub fn state(&self) -> Signal<DataState<R>> {
        self.state
    }

    pub fn refetch(&self) -> Refetch<A> {
        self.refetch
    }
}

impl<A: 'static, R: 'static> Clone for DataHandle<A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static, R: 'static> Copy for DataHandle<A, R> {}

/// Run the fetch lifecycle of `getter` for the current component
///
/// Must be called unconditionally on every render, like any hook. The state is
/// seeded only on the first render; later renders compare the change keys of the
/// previous and current arguments to decide whether to fetch again.
pub fn use_data_getter<A, R>(getter: &DataGetter<A, R>, args: A) -> DataHandle<A, R>
where
    A: Clone + PartialEq + 'static,
    R: Clone + PartialEq + 'static,
{
    let state = use_signal(|| DataState::from(getter.seed(&args)));

    // Arguments of the previous render, None before the first one. use_reactive!
    // needs the keys as a typed tuple, but the getter only keeps an erased comparison.
    let mut previous = use_hook(|| CopyValue::new(None::<A>));

    let should_fetch = {
        let mut previous = previous.write();
        let changed = match (*previous).as_ref() {
            None => true,
            Some(old) => getter.keys_changed(old, &args),
        };
        if changed && previous.is_some() {
            debug!(getter = getter.name(), "change keys differ, refetching");
        }
        *previous = Some(args.clone());
        changed
    };

    if should_fetch {
        issue_fetch(getter, args.clone(), state);
    }

    let callback = {
        let getter = getter.clone();
        use_callback(move |override_args: Option<A>| {
            let args = override_args.unwrap_or_else(|| args.clone());
            debug!(getter = getter.name(), "manual refetch");
            issue_fetch(&getter, args, state);
        })
    };

    DataHandle {
        state,
        refetch: Refetch { callback },
    }
}

/// Spawn one fetch on the current scope and write its result into `state`
fn issue_fetch<A, R>(getter: &DataGetter<A, R>, args: A, mut state: Signal<DataState<R>>)
where
    A: 'static,
    R: 'static,
{
    let name = getter.name();
    let pending = getter.fetch(args);

    spawn_fetch(name, async move {
        match pending.await {
            Ok(result) => {
                debug!(getter = name, "fetch resolved");
                state.set(DataState::Ready(result));
            }
            Err(error) => {
                error!(getter = name, "fetch failed: {error}");
            }
        }
    });
}
