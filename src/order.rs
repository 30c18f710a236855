//! Order functions and element hashes.
//!
//! [`SortedArraySet`](crate::collections::SortedArraySet) keeps its elements
//! sorted by an injectable total order, and
//! [`LinkedPointerSet`](crate::collections::LinkedPointerSet) identifies
//! members by a 32-bit element hash. Both collaborators live here.
//!
//! # Element hashes
//!
//! [`ElementHash`] is a deterministic, platform-independent 32-bit hash. It
//! is *not* the `std::hash::Hash` machinery: the value must be stable across
//! runs because the default order of a `SortedArraySet` and the
//! `hash_code` of a set are both defined in terms of it.
//!
//! ```rust
//! use setforge::order::ElementHash;
//!
//! assert_eq!(42_i32.element_hash(), 42);
//! assert_eq!("ab".element_hash(), 31 * 97 + 98);
//! assert_eq!(true.element_hash(), 1231);
//! ```
//!
//! # Order functions
//!
//! ```rust
//! use setforge::order::Order;
//! use std::cmp::Ordering;
//!
//! let by_length: Order<String> = Order::from_fn(|a: &String, b: &String| a.len().cmp(&b.len()));
//! assert_eq!(by_length.compare(&"aa".into(), &"b".into()), Ordering::Greater);
//! assert_eq!(by_length.reversed().compare(&"aa".into(), &"b".into()), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted pointer that shares a custom order function between a
/// set and the views copied out of it.
///
/// `std::sync::Arc` with the `arc` feature, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
type OrderFunction<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

#[cfg(not(feature = "arc"))]
type OrderFunction<T> = dyn Fn(&T, &T) -> Ordering;

// =============================================================================
// ElementHash
// =============================================================================

/// A deterministic 32-bit hash supplied by the element type.
///
/// Equal values must produce equal hashes. Distinct values may collide;
/// containers that identify members by hash alone (see
/// [`LinkedPointerSet`](crate::collections::LinkedPointerSet)) treat
/// colliding values as the same member.
pub trait ElementHash {
    /// Returns the 32-bit hash of this value.
    fn element_hash(&self) -> i32;
}

macro_rules! impl_element_hash_widening {
    ($($type:ty),*) => {
        $(
            impl ElementHash for $type {
                #[inline]
                fn element_hash(&self) -> i32 {
                    i32::from(*self)
                }
            }
        )*
    };
}

impl_element_hash_widening!(i8, i16, i32, u8, u16);

impl ElementHash for u32 {
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn element_hash(&self) -> i32 {
        *self as i32
    }
}

impl ElementHash for i64 {
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn element_hash(&self) -> i32 {
        (*self as u64).element_hash()
    }
}

impl ElementHash for u64 {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn element_hash(&self) -> i32 {
        (*self ^ (*self >> 32)) as i32
    }
}

impl ElementHash for isize {
    #[inline]
    fn element_hash(&self) -> i32 {
        (*self as i64).element_hash()
    }
}

impl ElementHash for usize {
    #[inline]
    fn element_hash(&self) -> i32 {
        (*self as u64).element_hash()
    }
}

impl ElementHash for i128 {
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn element_hash(&self) -> i32 {
        (*self as u128).element_hash()
    }
}

impl ElementHash for u128 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn element_hash(&self) -> i32 {
        ((*self ^ (*self >> 64)) as u64).element_hash()
    }
}

impl ElementHash for bool {
    #[inline]
    fn element_hash(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl ElementHash for char {
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn element_hash(&self) -> i32 {
        u32::from(*self) as i32
    }
}

impl ElementHash for str {
    /// Polynomial hash `h = 31 * h + unit` over the UTF-16 code units.
    fn element_hash(&self) -> i32 {
        self.encode_utf16().fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
    }
}

impl ElementHash for String {
    #[inline]
    fn element_hash(&self) -> i32 {
        self.as_str().element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for &T {
    #[inline]
    fn element_hash(&self) -> i32 {
        (**self).element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for Box<T> {
    #[inline]
    fn element_hash(&self) -> i32 {
        (**self).element_hash()
    }
}

// =============================================================================
// FxHashed
// =============================================================================

/// Wraps any `std::hash::Hash` value and derives its [`ElementHash`] from
/// `rustc-hash`'s Fx hasher, folded to 32 bits.
///
/// # Examples
///
/// ```rust
/// use setforge::order::{ElementHash, FxHashed};
///
/// let point = FxHashed((3_u8, -1_i64));
/// assert_eq!(point.element_hash(), FxHashed((3_u8, -1_i64)).element_hash());
/// ```
#[cfg(feature = "fxhash")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FxHashed<T>(pub T);

#[cfg(feature = "fxhash")]
impl<T> FxHashed<T> {
    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(feature = "fxhash")]
impl<T: std::hash::Hash> ElementHash for FxHashed<T> {
    fn element_hash(&self) -> i32 {
        use std::hash::Hasher;

        let mut hasher = rustc_hash::FxHasher::default();
        self.0.hash(&mut hasher);
        hasher.finish().element_hash()
    }
}

// =============================================================================
// Order
// =============================================================================

enum Strategy<T> {
    Pointer(fn(&T, &T) -> Ordering),
    Closure(ReferenceCounter<OrderFunction<T>>),
}

impl<T> Clone for Strategy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Pointer(function) => Self::Pointer(*function),
            Self::Closure(function) => Self::Closure(ReferenceCounter::clone(function)),
        }
    }
}

/// An injectable total order over `T`.
///
/// Cloning an `Order` is cheap: custom functions are shared behind a
/// reference counter.
pub struct Order<T> {
    strategy: Strategy<T>,
    reversed: bool,
}

fn compare_hashes<T: ElementHash>(left: &T, right: &T) -> Ordering {
    left.element_hash().cmp(&right.element_hash())
}

impl<T: ElementHash> Order<T> {
    /// Orders elements by their [`ElementHash`]. This is the default order of
    /// a `SortedArraySet`.
    #[must_use]
    pub fn by_hash() -> Self {
        Self {
            strategy: Strategy::Pointer(compare_hashes::<T>),
            reversed: false,
        }
    }
}

impl<T: Ord> Order<T> {
    /// Orders elements by their `Ord` implementation.
    #[must_use]
    pub fn natural() -> Self {
        Self {
            strategy: Strategy::Pointer(<T as Ord>::cmp),
            reversed: false,
        }
    }
}

#[cfg(not(feature = "arc"))]
impl<T> Order<T> {
    /// Wraps a comparison function.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            strategy: Strategy::Closure(ReferenceCounter::new(function)),
            reversed: false,
        }
    }
}

#[cfg(feature = "arc")]
impl<T> Order<T> {
    /// Wraps a comparison function.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            strategy: Strategy::Closure(ReferenceCounter::new(function)),
            reversed: false,
        }
    }
}

impl<T> Order<T> {
    /// Compares two elements.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        let ordering = match &self.strategy {
            Strategy::Pointer(function) => function(left, right),
            Strategy::Closure(function) => function(left, right),
        };
        if self.reversed {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Returns the inverse of this order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            reversed: !self.reversed,
        }
    }

    /// Returns `true` if this order is the inverse of the function it wraps.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }
}

impl<T> Clone for Order<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            reversed: self.reversed,
        }
    }
}

impl<T: ElementHash> Default for Order<T> {
    fn default() -> Self {
        Self::by_hash()
    }
}

impl<T> fmt::Debug for Order<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.strategy {
            Strategy::Pointer(_) => "pointer",
            Strategy::Closure(_) => "closure",
        };
        formatter
            .debug_struct("Order")
            .field("kind", &kind)
            .field("reversed", &self.reversed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0_i32, 0)]
    #[case(-7_i32, -7)]
    #[case(i32::MAX, i32::MAX)]
    fn test_i32_hash_is_identity(#[case] value: i32, #[case] expected: i32) {
        assert_eq!(value.element_hash(), expected);
    }

    #[rstest]
    fn test_u32_hash_wraps() {
        assert_eq!(u32::MAX.element_hash(), -1);
    }

    #[rstest]
    fn test_i64_hash_folds_halves() {
        assert_eq!(5_i64.element_hash(), 5);
        assert_eq!((1_i64 << 32).element_hash(), 1);
        assert_eq!((-1_i64).element_hash(), 0);
    }

    #[rstest]
    fn test_string_hash_matches_polynomial() {
        assert_eq!("".element_hash(), 0);
        assert_eq!("a".element_hash(), 97);
        assert_eq!("hello".element_hash(), 99_162_322);
        assert_eq!(String::from("hello").element_hash(), "hello".element_hash());
    }

    #[rstest]
    fn test_string_hash_wraps_on_overflow() {
        let long = "polygenelubricants".repeat(4);
        // Must not panic in debug builds.
        let _ = long.element_hash();
    }

    #[rstest]
    fn test_bool_and_char_hash() {
        assert_eq!(false.element_hash(), 1237);
        assert_eq!('A'.element_hash(), 65);
    }

    #[rstest]
    fn test_by_hash_order() {
        let order = Order::<i32>::by_hash();
        assert_eq!(order.compare(&1, &2), Ordering::Less);
        assert_eq!(order.compare(&2, &2), Ordering::Equal);
        assert_eq!(order.reversed().compare(&1, &2), Ordering::Greater);
    }

    #[rstest]
    fn test_reversed_twice_is_identity() {
        let order = Order::<i32>::natural().reversed().reversed();
        assert!(!order.is_reversed());
        assert_eq!(order.compare(&3, &9), Ordering::Less);
    }

    #[rstest]
    fn test_from_fn_is_shared_between_clones() {
        let order = Order::from_fn(|a: &i32, b: &i32| b.cmp(a));
        let copy = order.clone();
        assert_eq!(order.compare(&1, &2), copy.compare(&1, &2));
        assert_eq!(copy.compare(&1, &2), Ordering::Greater);
    }

    #[cfg(feature = "fxhash")]
    #[rstest]
    fn test_fx_hashed_is_deterministic() {
        let left = FxHashed(String::from("setforge"));
        let right = FxHashed(String::from("setforge"));
        assert_eq!(left.element_hash(), right.element_hash());
        assert_eq!(left.into_inner(), "setforge");
    }
}
