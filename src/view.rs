//! # Decorated Views
//!
//! A [`DataView`] pairs a [`DataGetter`] with the child component that displays
//! its result and the loading view shown until one exists. Mounting it (through
//! [`DataView::render`] or the [`WithData`] component) runs the fetch lifecycle
//! from [`use_data_getter`].
//!
//! The child and the loading view are mounted as components of their own, so
//! either one may use hooks.

use dioxus::dioxus_core::{DynamicNode, VComponent};
use dioxus::prelude::*;

use crate::{
    getter::DataGetter,
    hooks::{Refetch, use_data_getter},
};

/// Props handed to the wrapped child: the result, the arguments it was rendered
/// with, and the refetch capability
#[derive(Props, Clone, PartialEq)]
pub struct FetchedProps<A: Clone + PartialEq + 'static, R: Clone + PartialEq + 'static> {
    /// The latest result
    pub data: R,
    /// The decorated view's arguments for this render
    pub args: A,
    pub refetch: Refetch<A>,
}

/// Built-in placeholder shown while no result is available
#[component]
pub fn DefaultLoading() -> Element {
    rsx! {
        div { "Loading..." }
    }
}

/// A child component wrapped with a data getter
///
/// Build one with [`DataGetter::wrap`]. Build it once (for example in
/// `use_hook`) and pass it down; equality is identity, so a rebuilt view
/// counts as a new prop.
pub struct DataView<A: Clone + PartialEq + 'static, R: Clone + PartialEq + 'static> {
    getter: DataGetter<A, R>,
    child: fn(FetchedProps<A, R>) -> Element,
    loading: fn() -> Element,
}

impl<A, R> DataView<A, R>
where
    A: Clone + PartialEq + 'static,
    R: Clone + PartialEq + 'static,
{
    pub(crate) fn new(
        getter: DataGetter<A, R>,
        child: fn(FetchedProps<A, R>) -> Element,
        loading: fn() -> Element,
    ) -> Self {
        Self {
            getter,
            child,
            loading,
        }
    }

    /// Replace the loading view
    pub fn with_loading(mut self, loading: fn() -> Element) -> Self {
        self.loading = loading;
        self
    }

    pub fn getter(&self) -> &DataGetter<A, R> {
        &self.getter
    }

    /// Mount the decorated view with the given arguments
    pub fn render(&self, args: A) -> Element {
        rsx! {
            WithData { view: self.clone(), args }
        }
    }
}

impl<A: Clone + PartialEq + 'static, R: Clone + PartialEq + 'static> Clone for DataView<A, R> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            child: self.child,
            loading: self.loading,
        }
    }
}

impl<A: Clone + PartialEq + 'static, R: Clone + PartialEq + 'static> PartialEq
    for DataView<A, R>
{
    fn eq(&self, other: &Self) -> bool {
        self.getter == other.getter
            && std::ptr::fn_addr_eq(self.child, other.child)
            && std::ptr::fn_addr_eq(self.loading, other.loading)
    }
}

/// Mounts either the loading view or the child, depending on the state of the
/// data getter
#[component]
pub fn WithData<A: Clone + PartialEq + 'static, R: Clone + PartialEq + 'static>(
    view: DataView<A, R>,
    args: A,
) -> Element {
    let handle = use_data_getter(&view.getter, args.clone());

    let node = match handle.data() {
        Some(data) => {
            let props = FetchedProps {
                data,
                args,
                refetch: handle.refetch(),
            };
            DynamicNode::Component(VComponent::new(view.child, props, "FetchedView"))
        }
        None => DynamicNode::Component(VComponent::new(view.loading, (), "LoadingView")),
    };

    rsx! {
        {node}
    }
}
