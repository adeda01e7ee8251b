//! Call-site macros for the jsx factory
//!
//! `jsx!` takes children as separate arguments, the way lowered JSX passes
//! them. Each child goes through `JsxChild::from`, so strings, numbers,
//! booleans, options, arrays, vectors and nodes can be mixed freely.

/// Variadic form of [`crate::jsx::jsx`].
///
/// # Example
/// ```ignore
/// let node = jsx!("p", None, "Total: ", count, show_unit.then_some("kg"));
/// ```
#[macro_export]
macro_rules! jsx {
    ($tag:expr, $props:expr $(, $child:expr)* $(,)?) => {{
        let children: ::std::vec::Vec<$crate::jsx::JsxChild> =
            ::std::vec![$($crate::jsx::JsxChild::from($child)),*];
        $crate::jsx::jsx($tag, $props, children)
    }};
}
