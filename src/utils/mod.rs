//! This module contains utility functions and helper macros used throughout
//! the bpcluster crate.
//!
//! Key functionalities include:
//!
//! - [`FlatMapGluer`]: a lazy flat-map iterator adapter with an optional
//!   terminal sentinel, used to drive stateful per-element expansion
//!   functions to completion.
//! - Macros for common struct operations: [`getter_fn!`](crate::getter_fn)
//!   for reference getters and [`with_field_fn!`](crate::with_field_fn) for
//!   builder-style `with_*` methods.

mod glue;

pub use glue::{
    FlatMapGluer,
    GlueExt,
};

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
            self.$field_name = value;
            self
            }
        }
    };
}
