//! Raw child values accepted in child position
//!
//! Everything a JSX expression can evaluate to: nodes, strings, numbers,
//! booleans, the two absent values and nested lists of all of these.

use crate::node::VNode;

/// A value supplied in child position, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxChild {
    Node(VNode),
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Undefined,
    List(Vec<JsxChild>),
}

impl JsxChild {
    /// Build a nested list from anything convertible into children
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<JsxChild>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether normalization drops this value outright.
    ///
    /// The drop set is `Null`, `Undefined`, `false` and `""`. `0` and `true`
    /// are kept.
    pub fn is_dropped(&self) -> bool {
        match self {
            Self::Null | Self::Undefined | Self::Bool(false) => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// String form of a number, matching what a JavaScript host prints.
pub fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }
    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        // Exponent form: `1e21` -> `1e+21`, `1e-7` -> `1e-7`
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{n}")
}

impl From<VNode> for JsxChild {
    fn from(node: VNode) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for JsxChild {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for JsxChild {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for JsxChild {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for JsxChild {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Goes through the shortest `f32` text, so `0.1f32` stays `0.1`.
impl From<f32> for JsxChild {
    fn from(n: f32) -> Self {
        Self::Float(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<f64> for JsxChild {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

macro_rules! impl_child_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for JsxChild {
                fn from(n: $ty) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

// Values outside `i64` keep their exact digits as text.
macro_rules! impl_child_from_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for JsxChild {
                fn from(n: $ty) -> Self {
                    i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Int)
                }
            }
        )*
    };
}

impl_child_from_int!(i8, i16, i32, i64, u8, u16, u32);
impl_child_from_wide_int!(isize, usize, u64, i128, u128);

/// `None` is an absent value and is dropped like `undefined`.
impl<T: Into<JsxChild>> From<Option<T>> for JsxChild {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl<T: Into<JsxChild>> From<Vec<T>> for JsxChild {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<JsxChild>, const N: usize> From<[T; N]> for JsxChild {
    fn from(items: [T; N]) -> Self {
        Self::list(items)
    }
}

impl From<()> for JsxChild {
    fn from(_: ()) -> Self {
        Self::Undefined
    }
}
