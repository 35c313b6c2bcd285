use std::fmt::{self, Display, Formatter};

use crate::error::{Error, Result};

/// An optional `T`, that may not contain an actual value.
///
/// Meant to be used as a field in a struct where the field may be absent,
/// without resorting to a `Box`, a reference or a magic value such as an
/// empty string.
///
/// ```
/// # use optional_core::Optional;
/// struct User {
///     name: String,
///     email: Optional<String>,
/// }
///
/// let user = User { name: "Mr Snuggles".into(), email: Optional::none() };
/// assert!(user.email.is_none());
/// assert_eq!("n/a", user.email.or_default("n/a".into()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Create an instance holding `value`.
    /// Any value is accepted, including `T::default()`.
    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    /// Create an instance without a value.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Reference to the inner value, or `None` if the value is absent.
    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Same as [`Self::value`] but with the presence flag as a second value.
    /// The reference is always `None` when the flag is `false`.
    pub fn value_with_presence(&self) -> (Option<&T>, bool) {
        match self.value() {
            Some(value) => (Some(value), true),
            None => (None, false),
        }
    }

    /// `true` if this has a value.
    pub fn is_some(&self) -> bool {
        self.value().is_some()
    }

    /// `true` if this is considered empty.
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Return the inner value if it exists, otherwise the result of `f`.
    ///
    /// `f` is only called when the value is absent.
    /// ```
    /// # use optional_core::Optional;
    /// let value = Optional::some(1).or(|| unreachable!());
    /// assert_eq!(1, value);
    /// ```
    pub fn or<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.0 {
            Some(value) => value,
            None => f(),
        }
    }

    /// Return the inner value or `fallback` if this is considered empty.
    ///
    /// Unlike [`Self::or`] the fallback is constructed by the caller
    /// regardless of whether it's used.
    pub fn or_default(self, fallback: T) -> T {
        self.or(|| fallback)
    }

    /// Map the inner value into a new `Optional`.
    pub fn map<F, U>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(f))
    }

    /// Take the inner value, or fail with [`Error::Absent`].
    pub fn require(self) -> Result<T> {
        self.0.ok_or(Error::Absent)
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

/// Absent values are displayed as an empty string.
impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

/// Create an `Optional` holding `value`.
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

/// Create an empty `Optional`.
pub const fn none<T>() -> Optional<T> {
    Optional::none()
}
