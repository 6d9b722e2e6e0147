//! Shared macros for the codebase

/// Build an attribute map from `key => value` pairs
///
/// Values go through `serde_json::json!`, so `Option::None` becomes `null`.
///
/// ```rust
/// use relnet_core::attrs;
///
/// let attrs = attrs! { "rank" => 3, "title" => Option::<String>::None };
/// assert_eq!(attrs["rank"], 3);
/// assert!(attrs["title"].is_null());
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::shared::models::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::shared::models::Attributes::new();
        $(
            map.insert(::std::string::String::from($key), $crate::__private::serde_json::json!($value));
        )+
        map
    }};
}
