/// Asserts only when the `strict_assertions` feature is enabled.
///
/// The condition is still type-checked in every build.
macro_rules! strict_assert {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict_assertions") {
            assert!($($arg)*);
        }
    };
}
