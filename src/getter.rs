//! # Data Getter
//!
//! [`DataGetter`] is the configuration half of the decorator: the fetcher, an
//! optional default state, an optional change-keys selector and a diagnostic
//! name. Binding it to a child component with [`DataGetter::wrap`] produces the
//! decorated view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_data_getter::prelude::*;
//!
//! #[derive(Clone, PartialEq)]
//! struct SearchArgs {
//!     query: String,
//!     page_size: usize,
//! }
//!
//! #[derive(Clone, PartialEq)]
//! struct Hits {
//!     titles: Vec<String>,
//! }
//!
//! fn HitList(props: FetchedProps<SearchArgs, Hits>) -> Element {
//!     rsx! {
//!         ul {
//!             for title in props.data.titles.iter() {
//!                 li { "{title}" }
//!             }
//!         }
//!     }
//! }
//!
//! fn search_view() -> DataView<SearchArgs, Hits> {
//!     with_data_getter(|args: SearchArgs| async move {
//!         Ok::<_, FetchError>(Hits { titles: vec![args.query] })
//!     })
//!     .default_state(|_| Hits { titles: Vec::new() })
//!     .when_changes(|args| vec![args.query.clone()])
//!     .named("search")
//!     .wrap(HitList)
//! }
//! ```

use futures::future::{FutureExt, LocalBoxFuture};
use std::{fmt::Display, future::Future, rc::Rc};
use tracing::warn;

use crate::{
    errors::FetchError,
    view::{DataView, DefaultLoading, FetchedProps},
};
use dioxus::prelude::Element;

/// Name attached to log records when a getter was not given one
pub const DEFAULT_GETTER_NAME: &str = "data_getter";

type BoxedFetcher<A, R> = Rc<dyn Fn(A) -> LocalBoxFuture<'static, Result<R, FetchError>>>;
type BoxedDefaultState<A, R> = Rc<dyn Fn(&A) -> R>;
type BoxedKeysChanged<A> = Rc<dyn Fn(&A, &A) -> bool>;

/// Decorator configuration: how to fetch, how to seed, and when to refetch
///
/// Cloning is cheap; all closures are reference counted. Two getters are equal
/// when they share the same closures, so a getter built once keeps comparing
/// equal across renders.
pub struct DataGetter<A: 'static, R: 'static> {
    fetcher: BoxedFetcher<A, R>,
    default_state: Option<BoxedDefaultState<A, R>>,
    keys_changed: Option<BoxedKeysChanged<A>>,
    name: &'static str,
}

/// Start a decorator from a fetcher. Same as [`DataGetter::new`].
pub fn with_data_getter<A, R, F, Fut, E>(fetcher: F) -> DataGetter<A, R>
where
    A: 'static,
    R: 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<R, E>> + 'static,
    E: Display + 'static,
{
    DataGetter::new(fetcher)
}

impl<A: 'static, R: 'static> DataGetter<A, R> {
    /// Create a getter around an async fetcher
    ///
    /// The fetcher must reject rather than hang; there is no built-in timeout.
    pub fn new<F, Fut, E>(fetcher: F) -> Self
    where
        F: Fn(A) -> Fut + 'static,
        Fut: Future<Output = Result<R, E>> + 'static,
        E: Display + 'static,
    {
        let fetcher: BoxedFetcher<A, R> = Rc::new(move |args: A| {
            let pending = fetcher(args);
            async move { pending.await.map_err(FetchError::rejected) }.boxed_local()
        });

        Self {
            fetcher,
            default_state: None,
            keys_changed: None,
            name: DEFAULT_GETTER_NAME,
        }
    }

    /// Seed the state synchronously so the child renders before the first fetch resolves
    pub fn default_state(mut self, default_state: impl Fn(&A) -> R + 'static) -> Self {
        self.default_state = Some(Rc::new(default_state));
        self
    }

    /// Refetch whenever the selected keys change between renders
    ///
    /// Keys are compared elementwise over the positions both renders share. The
    /// selector should return the same number of keys every time; a length change
    /// alone is logged and does not trigger a refetch.
    /// Without a selector the getter fetches once on mount and never again.
    pub fn when_changes<K>(mut self, keys: impl Fn(&A) -> Vec<K> + 'static) -> Self
    where
        K: PartialEq + 'static,
    {
        self.keys_changed = Some(Rc::new(move |old: &A, new: &A| {
            let (old, new) = (keys(old), keys(new));
            if old.len() != new.len() {
                warn!("change keys went from {} to {} entries", old.len(), new.len());
            }
            old.iter().zip(new.iter()).any(|(old, new)| old != new)
        }));
        self
    }

    /// Name used in log records for this getter
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Bind a child component, producing the decorated view
    ///
    /// The loading view defaults to [`DefaultLoading`]; see [`DataView::with_loading`].
    pub fn wrap(self, child: fn(FetchedProps<A, R>) -> Element) -> DataView<A, R>
    where
        A: Clone + PartialEq,
        R: Clone + PartialEq,
    {
        DataView::new(self, child, DefaultLoading)
    }

    /// Invoke the fetcher
    pub fn fetch(&self, args: A) -> LocalBoxFuture<'static, Result<R, FetchError>> {
        (self.fetcher)(args)
    }

    /// The seeded state for these arguments, if a default state is configured
    pub fn seed(&self, args: &A) -> Option<R> {
        self.default_state.as_ref().map(|default_state| default_state(args))
    }

    /// Whether moving from `old` to `new` arguments requires a refetch
    pub fn keys_changed(&self, old: &A, new: &A) -> bool {
        self.keys_changed
            .as_ref()
            .is_some_and(|keys_changed| keys_changed(old, new))
    }

    /// Returns true if a change-keys selector is configured
    pub fn is_reactive(&self) -> bool {
        self.keys_changed.is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<A: 'static, R: 'static> Clone for DataGetter<A, R> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            default_state: self.default_state.clone(),
            keys_changed: self.keys_changed.clone(),
            name: self.name,
        }
    }
}

impl<A: 'static, R: 'static> PartialEq for DataGetter<A, R> {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        Rc::ptr_eq(&self.fetcher, &other.fetcher)
            && same(&self.default_state, &other.default_state)
            && same(&self.keys_changed, &other.keys_changed)
            && self.name == other.name
    }
}

impl<A: 'static, R: 'static> std::fmt::Debug for DataGetter<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGetter")
            .field("name", &self.name)
            .field("default_state", &self.default_state.is_some())
            .field("when_changes", &self.keys_changed.is_some())
            .finish()
    }
}
