use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// Field access for records.
///
/// Indices are positions in the record's
/// [`StructInfo`](crate::info::StructInfo) field list, ignored fields
/// excluded.
///
/// # Examples
///
/// ```
/// use envio_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Limits {
///     pub max: u32,
///     pub min: u32,
/// }
///
/// let mut limits = Limits { max: 10, min: 1 };
/// assert_eq!(limits.field_len(), 2);
///
/// *limits.field_at_mut(1).unwrap().downcast_mut::<u32>().unwrap() = 2;
/// assert_eq!(limits.min, 2);
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_>
    where
        Self: Sized,
    {
        StructFieldIter::new(self)
    }
}

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl StructFieldIter<'_> {
    /// Create a [`StructFieldIter`] from a [`Struct`].
    #[inline(always)]
    pub const fn new(target: &dyn Struct) -> StructFieldIter<'_> {
        StructFieldIter { target, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.target.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.target.field_len() - self.index;
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

