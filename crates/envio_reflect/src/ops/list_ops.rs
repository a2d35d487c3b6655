use crate::ops::Array;

/// A growable [`Array`].
///
/// # Examples
///
/// ```
/// use envio_reflect::ops::{Array, List};
///
/// let mut list = vec![true, true];
/// list.reset(3);
/// assert_eq!(list, [false, false, false]);
/// ```
pub trait List: Array {
    /// Replaces the content with `len` zero elements.
    fn reset(&mut self, len: usize);
}
