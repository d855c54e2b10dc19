//! Dense n-dimensional array storage for the Rastra image access engine.
//!
//! An [`ArrayStore`] owns one flat buffer and addresses it through the
//! allocation-step arithmetic of `rastra-core`. All positional access
//! goes through accessor handles created by the store's factory
//! methods:
//!
//! - [`RandomAccess`] / [`RandomAccessMut`]: absolute and relative
//!   repositioning, shared or exclusive borrow
//! - [`ArrayCursor`] / [`ArrayLocalizingCursor`]: sequential scan over
//!   every coordinate, axis 0 fastest
//! - [`ExtendedRandomAccess`]: unbounded positioning with a pluggable
//!   [`OutOfBounds`] strategy
//!
//! Accessors hold independent position state; any number of read
//! accessors may coexist over one store.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod out_of_bounds;
pub mod random_access;
pub mod store;

pub use cursor::{ArrayCursor, ArrayLocalizingCursor};
pub use out_of_bounds::{ExtendedRandomAccess, OutOfBounds};
pub use random_access::{RandomAccess, RandomAccessMut};
pub use store::ArrayStore;
