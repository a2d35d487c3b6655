use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, Typed};
use crate::ops::{FloatMut, FloatRef, IntMut, ReflectMut, ReflectRef, UintMut};

macro_rules! impl_scalar_typed {
    ($ty:ty, $kind:ident, $bits:expr) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind, $bits))
                })
            }
        }
    };
}

macro_rules! impl_int {
    ($($ty:ty => $var:ident),* $(,)?) => {$(
        impl_scalar_typed!($ty, Int, <$ty>::BITS);

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Int(*self as i64)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Int(IntMut::$var(self))
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

macro_rules! impl_uint {
    ($($ty:ty => $var:ident),* $(,)?) => {$(
        impl_scalar_typed!($ty, Uint, <$ty>::BITS);

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Uint(*self as u64)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Uint(UintMut::$var(self))
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty => $var:ident, $bits:literal),* $(,)?) => {$(
        impl_scalar_typed!($ty, Float, $bits);

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Float(FloatRef::$var(*self))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Float(FloatMut::$var(self))
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                *self == 0.0
            }
        }
    )*};
}

impl_int!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);
impl_uint!(u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);
impl_float!(f32 => F32, 32, f64 => F64, 64);

impl_scalar_typed!(bool, Bool, 1);

impl Reflect for bool {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Bool(*self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Bool(self)
    }

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        !*self
    }
}

impl_scalar_typed!(String, String, 0);

impl Reflect for String {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::String(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::String(self)
    }

    #[inline]
    fn reflect_is_zero(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, Typed};
    use crate::ops::{FloatRef, IntMut, ReflectMut, ReflectRef};

    #[test]
    fn widths_follow_the_type() {
        assert_eq!(i8::type_info().as_scalar().unwrap().bits(), 8);
        assert_eq!(usize::type_info().as_scalar().unwrap().bits(), usize::BITS);
        assert_eq!(f32::type_info().as_scalar().unwrap().bits(), 32);
        assert_eq!(String::type_info().scalar_kind(), Some(ScalarKind::String));
        assert!(u8::type_info().is_byte());
        assert!(!i8::type_info().is_byte());
    }

    #[test]
    fn views_widen_on_read() {
        assert!(matches!((-3_i16).reflect_ref(), ReflectRef::Int(-3)));
        assert!(matches!(
            1.5_f32.reflect_ref(),
            ReflectRef::Float(FloatRef::F32(v)) if v == 1.5
        ));

        let mut value = 0_i32;
        if let ReflectMut::Int(IntMut::I32(v)) = value.reflect_mut() {
            *v = 7;
        }
        assert_eq!(value, 7);
    }

    #[test]
    fn zero_values() {
        assert!(0_u64.reflect_is_zero());
        assert!(!(-0.5_f64).reflect_is_zero());
        assert!(false.reflect_is_zero());
        assert!(String::new().reflect_is_zero());
        assert!(!String::from(" ").reflect_is_zero());
    }
}
