use alloc::vec::Vec;
use core::iter;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ArrayInfo, ListInfo, TypeInfo, Typed};
use crate::ops::{Array, List, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Array(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Array(self)
    }

    fn reflect_is_zero(&self) -> bool {
        self.iter().all(Reflect::reflect_is_zero)
    }
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

// -----------------------------------------------------------------------------
// Vec<T>

impl<T: Reflect + Typed + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Vec<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect + Typed + Default> Array for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Reflect + Typed + Default> List for Vec<T> {
    fn reset(&mut self, len: usize) {
        self.clear();
        self.extend(iter::repeat_with(T::default).take(len));
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{Array, ArrayItemIter, List};

    #[test]
    fn array_info_keeps_capacity() {
        let info = <[i32; 5]>::type_info().as_array().unwrap();
        assert_eq!(info.capacity(), 5);
        assert_eq!(info.item().kind(), ReflectKind::Scalar);
        assert_eq!(<Vec<bool>>::type_info().kind(), ReflectKind::List);
    }

    #[test]
    fn array_zero_means_all_items_zero() {
        assert!([0_i32; 3].reflect_is_zero());
        assert!(![0, 5, 8].reflect_is_zero());
        assert!(Vec::<u8>::new().reflect_is_zero());
        assert!(!vec![0_u8].reflect_is_zero());
    }

    #[test]
    fn list_reset_and_iterate() {
        let mut list = vec![String::from("a")];
        list.reset(2);
        assert_eq!(list, [String::new(), String::new()]);

        let values = [1_u8, 2, 3];
        let sum: u8 = ArrayItemIter::new(&values)
            .filter_map(|v| v.downcast_ref::<u8>())
            .sum();
        assert_eq!(sum, 6);
        assert_eq!(Array::len(&list), 2);
    }
}
