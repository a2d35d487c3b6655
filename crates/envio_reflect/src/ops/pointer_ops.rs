use alloc::boxed::Box;

use crate::Reflect;

/// Nullable indirection.
///
/// # Examples
///
/// ```
/// use envio_reflect::{Reflect, ops::Pointer};
///
/// let mut ptr: Option<u8> = None;
/// assert!(ptr.pointee().is_none());
///
/// let fresh = ptr.new_pointee();
/// assert!(fresh.reflect_is_zero());
///
/// ptr.set_pointee(fresh).ok().unwrap();
/// assert_eq!(ptr, Some(0));
///
/// ptr.clear();
/// assert_eq!(ptr, None);
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, or `None` if the pointer is null.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, or `None` if the pointer is null.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Allocates a zero pointee without touching `self`.
    fn new_pointee(&self) -> Box<dyn Reflect>;

    /// Points `self` at `value`.
    ///
    /// Returns `value` back if it is not of the pointee type.
    fn set_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Makes the pointer null.
    fn clear(&mut self);
}
