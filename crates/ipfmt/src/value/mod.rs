//! Shapes and values.
//!
//! Every input the formatter accepts is lowered through [`AsIpValue`] into a
//! [`Value`], a closed sum type with one variant per [`Shape`]. Which variant a
//! type lowers to is fixed by its trait impl, so dispatch happens at compile
//! time and the renderer only has to `match`.
//!
//! # Accepted types
//!
//! | Shape      | Types                                                        |
//! |------------|--------------------------------------------------------------|
//! | `Integer`  | `i8 i16 i32 i64 u8 u16 u32 u64`                              |
//! | `Text`     | `str`, `String`, `Cow<str>`                                  |
//! | `Sequence` | `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`    |
//! | `Tuple`    | `(T,)` through `(T, T, T, T, T, T, T, T, T, T, T, T)`        |
//!
//! Sequence and tuple elements only need [`Display`](fmt::Display).
//!
//! Anything else has no impl and does not compile:
//!
//! ```compile_fail
//! // Floats are not a fixed-width integer shape.
//! let _ = ipfmt::format_ip(&1.5f64);
//! ```

use std::borrow::Cow;
use std::collections::{LinkedList, VecDeque};
use std::fmt;

use crate::octets::Octets;


/// Structural category of a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Fixed-width integer, one component per byte.
    Integer,
    /// String rendered as a single component.
    Text,
    /// Ordered container of one element type.
    Sequence,
    /// Fixed-arity tuple of one element type.
    Tuple,
}

impl Shape {
    /// Lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Integer => "integer",
            Shape::Text => "string",
            Shape::Sequence => "sequence",
            Shape::Tuple => "tuple",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component of a sequence or tuple, rendered through its `Display` impl.
pub type Component<'a> = &'a dyn fmt::Display;

/// An input lowered to its shape.
///
/// Borrows from the original input; lowering never copies element data.
pub enum Value<'a> {
    /// Fixed-width integer, already reinterpreted as unsigned.
    Integer(Octets),
    /// Text rendered verbatim.
    Text(&'a str),
    /// Ordered homogeneous elements.
    Sequence(Vec<Component<'a>>),
    /// Fixed-arity elements of one type.
    Tuple(Vec<Component<'a>>),
}

impl Value<'_> {
    /// Shape this value was lowered to.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Integer(_) => Shape::Integer,
            Value::Text(_) => Shape::Text,
            Value::Sequence(_) => Shape::Sequence,
            Value::Tuple(_) => Shape::Tuple,
        }
    }

    /// Number of components the value renders to.
    ///
    /// Text always counts as one component.
    pub fn component_count(&self) -> usize {
        match self {
            Value::Integer(octets) => octets.width().bytes(),
            Value::Text(_) => 1,
            Value::Sequence(items) | Value::Tuple(items) => items.len(),
        }
    }
}

/// Debug view of a component, using its `Display` output.
struct ComponentDebug<'a>(Component<'a>);

impl fmt::Debug for ComponentDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(octets) => f.debug_tuple("Integer").field(octets).finish(),
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Sequence(items) => {
                f.write_str("Sequence")?;
                f.debug_list()
                    .entries(items.iter().map(|c| ComponentDebug(*c)))
                    .finish()
            }
            Value::Tuple(items) => {
                f.write_str("Tuple")?;
                f.debug_list()
                    .entries(items.iter().map(|c| ComponentDebug(*c)))
                    .finish()
            }
        }
    }
}

/// Types that can be rendered in dotted notation.
///
/// Each implementor picks exactly one [`Shape`]. Tuples are only implemented
/// when every element has the same type, so a mixed tuple is a compile error:
///
/// ```compile_fail
/// let _ = ipfmt::format_ip(&(1i32, "two", 3i32));
/// ```
///
/// ```compile_fail
/// let _ = ipfmt::format_ip(&(1i32, 2i64));
/// ```
pub trait AsIpValue {
    /// Lower `self` to its shape variant.
    fn as_ip_value(&self) -> Value<'_>;

    /// Shape this type lowers to.
    fn shape(&self) -> Shape {
        self.as_ip_value().shape()
    }
}

impl<T: AsIpValue + ?Sized> AsIpValue for &T {
    #[inline]
    fn as_ip_value(&self) -> Value<'_> {
        (**self).as_ip_value()
    }
}

// Integers

macro_rules! impl_integer {
    ($($int:ty),*) => {
        $(
            impl AsIpValue for $int {
                #[inline]
                fn as_ip_value(&self) -> Value<'_> {
                    Value::Integer(Octets::from(*self))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

// Text

impl AsIpValue for str {
    #[inline]
    fn as_ip_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl AsIpValue for String {
    #[inline]
    fn as_ip_value(&self) -> Value<'_> {
        Value::Text(self.as_str())
    }
}

impl AsIpValue for Cow<'_, str> {
    #[inline]
    fn as_ip_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

// Sequences

fn sequence<'a, T, I>(items: I) -> Value<'a>
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Value::Sequence(items.into_iter().map(|item| item as Component<'a>).collect())
}

impl<T: fmt::Display> AsIpValue for [T] {
    fn as_ip_value(&self) -> Value<'_> {
        sequence(self)
    }
}

impl<T: fmt::Display, const N: usize> AsIpValue for [T; N] {
    fn as_ip_value(&self) -> Value<'_> {
        sequence(self)
    }
}

impl<T: fmt::Display> AsIpValue for Vec<T> {
    fn as_ip_value(&self) -> Value<'_> {
        sequence(self)
    }
}

impl<T: fmt::Display> AsIpValue for VecDeque<T> {
    fn as_ip_value(&self) -> Value<'_> {
        sequence(self)
    }
}

impl<T: fmt::Display> AsIpValue for LinkedList<T> {
    fn as_ip_value(&self) -> Value<'_> {
        sequence(self)
    }
}

// Tuples

/// Expands to `T` whatever the index; spells out `(T, T, ..)` one slot per index.
macro_rules! same_type {
    ($_idx:tt) => {
        T
    };
}

macro_rules! impl_tuple {
    ($($idx:tt)+) => {
        impl<T: fmt::Display> AsIpValue for ($(same_type!($idx),)+) {
            fn as_ip_value(&self) -> Value<'_> {
                Value::Tuple(vec![$(&self.$idx as Component<'_>),+])
            }
        }
    };
}

impl_tuple!(0);
impl_tuple!(0 1);
impl_tuple!(0 1 2);
impl_tuple!(0 1 2 3);
impl_tuple!(0 1 2 3 4);
impl_tuple!(0 1 2 3 4 5);
impl_tuple!(0 1 2 3 4 5 6);
impl_tuple!(0 1 2 3 4 5 6 7);
impl_tuple!(0 1 2 3 4 5 6 7 8);
impl_tuple!(0 1 2 3 4 5 6 7 8 9);
impl_tuple!(0 1 2 3 4 5 6 7 8 9 10);
impl_tuple!(0 1 2 3 4 5 6 7 8 9 10 11);
