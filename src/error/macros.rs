//! Constructor helpers for string-carrying error variants

/// Generates one constructor function per variant, each taking
/// `impl Into<String>` for every field.
///
/// # Example
/// ```rust,ignore
/// impl_error_constructors!({
///     FileReadFailed(path, reason),
/// });
///
/// let err = FileReadFailed("seed.ts", "permission denied");
/// ```
macro_rules! impl_error_constructors {
    ({ $($variant:ident($($field:ident),* $(,)?)),* $(,)? }) => {
        $(
            #[allow(non_snake_case)]
            #[doc = concat!("Creates a `", stringify!($variant), "` error")]
            pub fn $variant($($field: impl Into<String>),*) -> $crate::error::SeedError {
                $crate::error::SeedError::$variant {
                    $($field: $field.into()),*
                }
            }
        )*
    };
}

pub(crate) use impl_error_constructors;
