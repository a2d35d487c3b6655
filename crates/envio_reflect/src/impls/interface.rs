use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{InterfaceInfo, TypeInfo, Typed};
use crate::ops::{Interface, ReflectMut, ReflectRef};

impl Typed for Interface {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Interface(InterfaceInfo::new::<Self>()))
    }
}

impl Reflect for Interface {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Interface(self.get())
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Interface(self.get_mut())
    }

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        self.is_nil()
    }
}
