use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectMut, ReflectRef};

impl<T: Reflect + Typed + Default> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: Reflect + Typed + Default> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn new_pointee(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }

    fn set_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(*value.downcast::<T>()?);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Pointer;

    #[test]
    fn pointee_info() {
        let info = <Option<Option<u8>>>::type_info().as_pointer().unwrap();
        assert_eq!(info.pointee().kind(), ReflectKind::Pointer);
        assert!(info.pointee().as_pointer().unwrap().pointee().is_byte());
    }

    #[test]
    fn set_pointee_rejects_other_types() {
        let mut ptr: Option<String> = None;
        let back = ptr.set_pointee(Box::new(3_u8)).unwrap_err();
        assert!(back.is::<u8>());
        assert!(ptr.reflect_is_zero());

        ptr.set_pointee(Box::new(String::from("a"))).ok().unwrap();
        assert_eq!(ptr.as_deref(), Some("a"));
    }
}
