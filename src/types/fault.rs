//! Captured faults recorded on an [`Outcome`](crate::Outcome).
//!
//! A [`Fault`] is a shared handle to any error value. Cloning it is cheap and
//! two faults compare equal only when they point at the same captured error,
//! so merging outcomes moves the fault around without duplicating it.

use crate::types::alloc_type::String;
use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::Any;
use core::error::Error;
use core::fmt;

type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Shared handle to an error captured at an outcome boundary.
///
/// # Examples
///
/// ```
/// use op_outcome::Fault;
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let fault = Fault::new(io);
/// assert_eq!(fault.message(), "disk full");
/// assert!(fault.downcast_ref::<std::io::Error>().is_some());
///
/// let copy = fault.clone();
/// assert_eq!(copy, fault);
/// assert_ne!(Fault::msg("disk full"), fault);
/// ```
#[derive(Clone)]
pub struct Fault {
    inner: SharedError,
}

impl Fault {
    /// Captures an error value.
    ///
    /// Passing a `Fault` returns that same handle instead of wrapping it.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(fault) = (&error as &dyn Any).downcast_ref::<Fault>() {
            return fault.clone();
        }
        Self { inner: Arc::new(error) }
    }

    /// Creates a fault that carries only a message.
    #[inline]
    pub fn msg<S: Into<String>>(message: S) -> Self {
        Self::new(FaultMessage::new(message))
    }

    /// Wraps an error that is already shared.
    #[inline]
    pub fn from_shared(inner: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    /// Returns the `Display` text of the captured error.
    #[inline]
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Returns the captured error.
    #[inline]
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Attempts to view the captured error as a concrete type.
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if both handles point at the same captured error.
    #[inline]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Fault {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Fault {}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fault").field(&self.inner).finish()
    }
}

impl fmt::Display for Fault {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Error for Fault {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Fault {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self { inner: Arc::from(error) }
    }
}

impl From<FaultMessage> for Fault {
    #[inline]
    fn from(message: FaultMessage) -> Self {
        Self::new(message)
    }
}

/// Error type holding nothing but a message.
///
/// Used for faults rebuilt from their serialized text and for callers that
/// have no richer error value at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultMessage(String);

impl FaultMessage {
    /// Creates a message-only error.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self(message.into())
    }

    /// Returns the message.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaultMessage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for FaultMessage {}

// Faults cross the wire as their message only.
#[cfg(feature = "diagnostics")]
impl serde::Serialize for Fault {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.inner)
    }
}

#[cfg(feature = "diagnostics")]
impl<'de> serde::Deserialize<'de> for Fault {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(Fault::msg)
    }
}
