//! Implementations of bit-keyed structures.

//  Design considerations
//
//  #   Why inherent?
//
//  The methods are doubly implemented (as inherent methods, and BitSet methods) so they can be called without importing
//  the trait.
//
//  #   Why are set operations in a separate module?
//
//  They are a layer of their own: allocating forms atop destination forms, atop the storage primitives. Keeping them
//  apart keeps `bit_set_dense` focused on single-element and ranged access.

pub mod bit_set_dense;
pub mod iter;
pub mod set_algebra;

pub use bit_set_dense::DenseBitSet;
pub use iter::Iter;
