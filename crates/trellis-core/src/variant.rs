//! Type-erased value container.
//!
//! A [`Variant`] carries an arbitrary value without coupling the holder to
//! its type. Drag-and-drop payloads travel through the widget tree as
//! variants so that the tree never needs to know what is being dragged.
//!
//! Cloning a variant is shallow: both copies share the same value.
//!
//! ```
//! use trellis_core::Variant;
//!
//! let v = Variant::new(42_i32);
//! assert!(v.is::<i32>());
//! assert_eq!(*v.get::<i32>().unwrap(), 42);
//! assert!(v.get::<String>().is_err());
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Errors that can occur when reading a [`Variant`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantError {
    /// The variant holds no value.
    #[error("variant is empty")]
    Empty,
    /// The variant holds a value of another type.
    #[error("variant type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The requested type name.
        expected: &'static str,
        /// The stored type name.
        found: &'static str,
    },
}

#[derive(Clone)]
struct Stored {
    value: Rc<dyn Any>,
    type_name: &'static str,
}

/// A placeholder for a value of any type.
#[derive(Clone, Default)]
pub struct Variant {
    inner: Option<Stored>,
}

impl Variant {
    /// Create a variant holding `value`.
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Some(Stored {
                value: Rc::new(value),
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    /// Create an empty variant.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the variant holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns true if the variant holds a value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.as_ref().is_some_and(|s| s.value.is::<T>())
    }

    /// Returns the name of the stored type, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        self.inner.as_ref().map(|s| s.type_name)
    }

    /// Borrow the stored value as `T`.
    pub fn get<T: Any>(&self) -> Result<&T, VariantError> {
        let stored = self.inner.as_ref().ok_or(VariantError::Empty)?;
        stored
            .value
            .downcast_ref::<T>()
            .ok_or(VariantError::TypeMismatch {
                expected: std::any::type_name::<T>(),
                found: stored.type_name,
            })
    }

    /// Borrow the stored value as `T`, or `None` on any mismatch.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        self.get::<T>().ok()
    }

    /// Returns true if both variants share the same stored value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Rc::ptr_eq(&a.value, &b.value),
            (None, None) => true,
            _ => false,
        }
    }

    /// Sets the variant to empty.
    pub fn reset(&mut self) {
        self.inner = None;
    }

    /// Moves the value out, leaving this variant empty.
    pub fn take(&mut self) -> Self {
        Self {
            inner: self.inner.take(),
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(stored) => f.debug_tuple("Variant").field(&stored.type_name).finish(),
            None => f.write_str("Variant(empty)"),
        }
    }
}
