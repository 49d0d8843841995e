//! A generic key for bit-keyed structures.

/// A bit key is an integer which may, or may not, designate an element of a bit-keyed structure.
///
/// Bit-keyed structures only hold non-negative integers: negative values have no key, and are treated as "absent" by
/// queries and ignored by mutations.
pub trait BitKey: Copy {
    /// Returns the key associated to the value, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::api::BitKey;
    /// assert_eq!(Some(42), 42i32.into_key());
    /// assert_eq!(None, (-1i64).into_key());
    /// assert_eq!(Some(u64::MAX), u64::MAX.into_key());
    /// ```
    fn into_key(self) -> Option<u64>;
}

//  #   Why a macro?
//
//  `u64::try_from` covers every integer up to 64-bits, signed or not, so the implementations are all alike.
macro_rules! impl_bit_key {
    ($($t:ty),*) => {
        $(
            impl BitKey for $t {
                #[inline]
                fn into_key(self) -> Option<u64> {
                    u64::try_from(self).ok()
                }
            }
        )*
    };
}

impl_bit_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// mod tests
