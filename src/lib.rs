//! Dense bit set
//!
//! A set of non-negative integers, stored as a growable array of 64-bit words.
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains a selection of vocabulary types and traits.
//! -   The `collections` module contains the dense bit set itself, `DenseBitSet`.
//! -   The `utils` module contains a selection of low-level types upon which the implementation is built.
//!
//!
//! #   Key type
//!
//! Elements are reported as `u64`, and accepted as any integer implementing `BitKey`, signed or not.
//!
//! #### Why accept signed integers?
//!
//! Callers commonly compute elements with signed arithmetic. Rather than forcing them to pre-validate, negative values
//! are simply never members: inserting one does nothing, querying one answers "absent".
//!
//! #### Why report `u64`?
//!
//! `usize` is only sufficient to index every _byte_, not every _bit_, and is platform dependent. `u64` is large enough
//! for any set that fits in memory, on any platform.
//!
//!
//! #   Representation
//!
//! The set is kept in canonical form at all times: the last word, if any, is never all-zeros. As a result, two sets
//! are equal if and only if their words are equal, and emptiness is a matter of having no words at all.
//!
//! ```
//! use dense_bit_set::collections::DenseBitSet;
//!
//! let mut set = DenseBitSet::from_elements(&[0, 1, 2, 3, 5, 7, 8, 9]);
//!
//! assert_eq!("{0..3 5 7..9}", set.to_string());
//!
//! set.delete_range(0, 64);
//!
//! assert!(set.is_empty());
//! assert!(set.words().is_empty());
//! ```

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

extern crate alloc;

pub mod api;
pub mod collections;
pub mod utils;
