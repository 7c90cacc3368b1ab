/// Builds a [`Value`](crate::Value) from a literal-like syntax.
///
/// `[..]` builds a sequence and `{key: value, ..}` a map; any other token tree goes
/// through `Value::from`. Negative numbers and other multi-token expressions nested in
/// `[..]` or `{..}` need parentheses.
///
/// ```rust
/// use readable::value;
///
/// let v = value!({0: "A", 1: [true, null, (-2)]});
/// assert_eq!(v.to_string(), "{0–\"A\", 1–[true, <null>, -2]}");
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Seq(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Seq(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::ValueMap::new())
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert($crate::value!($key), $crate::value!($value));
        )*
        $crate::Value::Map(map)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Renders every argument and joins the results with `, `.
///
/// Each argument is converted with `Value::from`.
///
/// ```rust
/// use readable::readable;
///
/// assert_eq!(readable!(true, None::<i32>, "id", 18u8), "true, <null>, \"id\", 0x12");
/// assert_eq!(readable!(), "");
/// ```
#[macro_export]
macro_rules! readable {
    () => {
        ::std::string::String::new()
    };

    ($($arg:expr),+ $(,)?) => {
        $crate::to_string(&[$($crate::Value::from($arg)),+])
    };
}
