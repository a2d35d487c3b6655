use crate::Reflect;

// -----------------------------------------------------------------------------
// Array

/// Element access for fixed capacity sequences.
///
/// # Examples
///
/// ```
/// use envio_reflect::ops::Array;
///
/// let mut arr = [0_i32, 5, 8];
/// assert_eq!(Array::len(&arr), 3);
///
/// *Array::get_mut(&mut arr, 0).unwrap().downcast_mut::<i32>().unwrap() = 1;
/// assert_eq!(arr, [1, 5, 8]);
/// assert!(Array::get(&arr, 3).is_none());
/// ```
pub trait Array: Reflect {
    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there is no element.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An iterator over the elements of an [`Array`] or [`List`](crate::ops::List).
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl ArrayItemIter<'_> {
    /// Create a [`ArrayItemIter`] from a [`Array`].
    #[inline(always)]
    pub const fn new(array: &dyn Array) -> ArrayItemIter<'_> {
        ArrayItemIter { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.array.len() - self.index;
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
