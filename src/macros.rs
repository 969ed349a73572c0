//! Variant accessor macros
//!
//! These macros eliminate repetitive match code on the payload sum type.
//! They use `paste` internally for identifier concatenation.

/// Generate is_xxx and as_xxx for enums with payload variants
///
/// Uses paste's `:camel` modifier to convert the method name to the variant
/// name, and expects the payload type to be named `<Variant>Data`.
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&XxxData>`
///
/// No `_mut` variant: payloads are read-only once a node exists.
///
/// # Example
/// ```ignore
/// impl NodeData {
///     // element -> Element(ElementData), text -> Text(TextData)
///     impl_payload_accessors!(element, text);
/// }
/// ```
macro_rules! impl_payload_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " payload"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " payload reference"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel Data>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

/// Generate a checked accessor that reads one field of a variant payload
///
/// Expands to a method on [`Node`](crate::Node) returning
/// `RenderTreeResult<$ret>`, failing with `WrongVariant` on mismatch.
///
/// # Example
/// ```ignore
/// impl Node {
///     impl_checked_accessor!(text_font_size, text, Text, f32, |t| t.font_size());
/// }
/// ```
macro_rules! impl_checked_accessor {
    (
        $(#[$meta:meta])*
        $method:ident, $variant:ident, $kind:ident, $ret:ty, |$p:ident| $body:expr
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            pub fn $method(&self) -> $crate::RenderTreeResult<$ret> {
                match self.data.[<as_ $variant>]() {
                    Some($p) => Ok($body),
                    None => Err(self.wrong_variant($crate::NodeKind::$kind)),
                }
            }
        }
    };
}
