use crate::types::alloc_type::{Cow, String};
use core::fmt;

/// Opaque key used to route an outcome's log lines to a named logger.
///
/// Usually the name of the component that produced the outcome.
///
/// # Examples
///
/// ```
/// use op_outcome::logging::{type_key, CallerId};
///
/// struct OrderService;
///
/// let by_type = CallerId::of::<OrderService>();
/// let by_value = CallerId::of_val(&OrderService);
/// assert_eq!(by_type, by_value);
/// assert_eq!(by_type.as_str(), type_key::<OrderService>());
/// assert!(by_type.as_str().ends_with("OrderService"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallerId(Cow<'static, str>);

impl CallerId {
    /// Identity derived from a type token.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(type_key::<T>()))
    }

    /// Identity derived from the type of a caller value.
    #[inline]
    pub fn of_val<T: ?Sized>(caller: &T) -> Self {
        Self(Cow::Borrowed(core::any::type_name_of_val(caller)))
    }

    /// Identity with an explicit name.
    #[inline]
    pub fn named<S: Into<Cow<'static, str>>>(name: S) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolves the logger key for a type.
#[inline]
pub fn type_key<T: ?Sized>() -> &'static str {
    core::any::type_name::<T>()
}

impl fmt::Display for CallerId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for CallerId {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

impl From<String> for CallerId {
    #[inline]
    fn from(name: String) -> Self {
        Self::named(name)
    }
}
