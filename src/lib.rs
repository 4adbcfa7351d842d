#![doc = include_str!("../README.md")]

// Core modules
pub mod errors;
pub mod getter;
pub mod hooks;
pub mod platform;
pub mod state;
pub mod view;

pub mod prelude {
    //! The prelude exports all the most common types and functions for using dioxus-data-getter.

    // The decorator entry point and its configuration
    pub use crate::getter::{DataGetter, with_data_getter};

    // The decorated view and what its child receives
    pub use crate::view::{DataView, DefaultLoading, FetchedProps, WithData};

    // The lifecycle hook for components that want it without the view switch
    pub use crate::hooks::{DataHandle, Refetch, use_data_getter};

    // The state enum, needed for matching
    pub use crate::state::DataState;

    pub use crate::errors::{FetchError, FetchResult};
}
