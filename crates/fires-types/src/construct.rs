//! Fallible construction trait.
//!
//! Types whose invariants can be violated by raw field values (a user with
//! no memberships, a membership pointing at a nameless entity) implement
//! [`TryNew`] so that validation happens exactly once, at construction.
//!
//! # When to Use Which Pattern
//!
//! | Pattern | Use When |
//! |---------|----------|
//! | `new()` | Construction always succeeds (infallible) |
//! | [`TryNew`] | Construction requires validation (fallible) |
//! | `TryFrom<T>` | Converting from another type (fallible) |

/// Trait for fallible construction with validation.
///
/// Implementors should not also expose a plain `new()` performing the same
/// validation; the `try_` prefix makes fallibility explicit at call sites.
///
/// # Example
///
/// ```
/// use fires_types::TryNew;
///
/// #[derive(Debug)]
/// struct Quota(u32);
///
/// #[derive(Debug, PartialEq)]
/// struct ZeroQuotaError;
///
/// impl TryNew for Quota {
///     type Error = ZeroQuotaError;
///     type Args = u32;
///
///     fn try_new(value: u32) -> Result<Self, Self::Error> {
///         if value == 0 {
///             return Err(ZeroQuotaError);
///         }
///         Ok(Quota(value))
///     }
/// }
///
/// assert!(Quota::try_new(10).is_ok());
/// assert_eq!(Quota::try_new(0).unwrap_err(), ZeroQuotaError);
/// ```
pub trait TryNew {
    /// The error type returned when validation fails.
    type Error;

    /// Arguments required for construction. Use a tuple for several.
    type Args;

    /// Attempts to create a new instance.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if validation fails.
    fn try_new(args: Self::Args) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
