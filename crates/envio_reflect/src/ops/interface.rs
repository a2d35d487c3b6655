use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;

/// A dynamically typed, possibly nil value.
///
/// The engine recurses into the held value using the held value's own
/// type; a nil interface is an error on both directions.
///
/// # Examples
///
/// ```
/// use envio_reflect::{Reflect, ops::Interface};
///
/// let nil = Interface::nil();
/// assert!(nil.is_nil());
/// assert!(nil.reflect_is_zero());
///
/// let some = Interface::new(42_u32);
/// assert_eq!(some.get().and_then(|v| v.downcast_ref::<u32>()), Some(&42));
/// ```
#[derive(Default)]
pub struct Interface(pub Option<Box<dyn Reflect>>);

impl Interface {
    /// Creates a nil interface.
    #[inline]
    pub const fn nil() -> Self {
        Self(None)
    }

    /// Creates an interface holding `value`.
    #[inline]
    pub fn new<T: Reflect>(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    /// Returns `true` if nothing is held.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the held value.
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.0.as_deref()
    }

    /// Returns the held value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.0.as_deref_mut()
    }
}

impl fmt::Debug for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Interface({})", value.reflect_type_info().type_path()),
            None => f.write_str("Interface(nil)"),
        }
    }
}
