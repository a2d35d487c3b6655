use alloc::sync::Arc;

use envio_reflect::info::TypeInfo;
use envio_reflect::registry::{TypeTraitEnvDecode, TypeTraitEnvEncode};

use crate::Engine;

// -----------------------------------------------------------------------------
// Encoder

/// How values of a type are written to the store.
#[derive(Debug)]
#[non_exhaustive]
pub enum Encoder {
    /// Built-in text form.
    Scalar,
    /// Follows the pointee, or encodes its zero value when null.
    Pointer(Arc<Routines>),
    /// Dispatches on the held value at run time.
    Interface,
    /// Items joined by the separator, using the item routines.
    Sequence(Arc<Routines>),
    /// Walks the record fields as separate variables.
    Struct,
    /// The type's [`EnvEncode`](envio_reflect::registry::EnvEncode).
    Custom(TypeTraitEnvEncode),
    Unsupported,
}

// -----------------------------------------------------------------------------
// Decoder

/// How values of a type are read from the store.
#[derive(Debug)]
#[non_exhaustive]
pub enum Decoder {
    Scalar,
    /// Decodes in place, or into a fresh pointee kept only when non-zero.
    Pointer(Arc<Routines>),
    Interface,
    /// Fixed capacity, filled from the front.
    Array(Arc<Routines>),
    /// Replaced by a fresh list sized to the item count.
    List(Arc<Routines>),
    Struct,
    /// The type's [`EnvDecode`](envio_reflect::registry::EnvDecode).
    Custom(TypeTraitEnvDecode),
    Unsupported,
}

// -----------------------------------------------------------------------------
// Routines

/// The encoder and decoder of one type, derived once per engine.
///
/// A registered [`EnvEncode`](envio_reflect::registry::EnvEncode) or
/// [`EnvDecode`](envio_reflect::registry::EnvDecode) overrides the built-in
/// routine in its direction, except on pointer types. A sequence whose item
/// cannot be written as a single separated piece is unsupported.
///
/// # Examples
///
/// ```
/// use envio_engine::{Decoder, Encoder, Engine};
/// use envio_reflect::info::Typed;
///
/// let engine = Engine::new();
/// let routines = engine.routines(<Vec<Option<u16>>>::type_info());
/// assert!(matches!(routines.encoder(), Encoder::Sequence(_)));
/// assert!(matches!(routines.decoder(), Decoder::List(_)));
///
/// let routines = engine.routines(<Vec<Vec<u8>>>::type_info());
/// assert!(matches!(routines.decoder(), Decoder::Unsupported));
/// ```
#[derive(Debug)]
pub struct Routines {
    info: &'static TypeInfo,
    encoder: Encoder,
    decoder: Decoder,
}

impl Routines {
    pub(crate) fn derive(engine: &Engine, info: &'static TypeInfo) -> Self {
        let (mut encoder, mut decoder) = match info {
            TypeInfo::Scalar(_) => (Encoder::Scalar, Decoder::Scalar),
            TypeInfo::Pointer(pointer) => {
                let pointee = engine.routines(pointer.pointee());
                (Encoder::Pointer(pointee.clone()), Decoder::Pointer(pointee))
            }
            TypeInfo::Interface(_) => (Encoder::Interface, Decoder::Interface),
            TypeInfo::Array(array) => {
                let item = engine.routines(array.item());
                let decoder = if item.decodes_piece() {
                    Decoder::Array(item.clone())
                } else {
                    Decoder::Unsupported
                };
                (Self::sequence_encoder(item), decoder)
            }
            TypeInfo::List(list) => {
                let item = engine.routines(list.item());
                let decoder = if item.decodes_piece() {
                    Decoder::List(item.clone())
                } else {
                    Decoder::Unsupported
                };
                (Self::sequence_encoder(item), decoder)
            }
            TypeInfo::Struct(_) => (Encoder::Struct, Decoder::Struct),
            TypeInfo::Opaque(_) => (Encoder::Unsupported, Decoder::Unsupported),
        };

        if !matches!(info, TypeInfo::Pointer(_)) {
            if let Some(custom) = info.get_trait::<TypeTraitEnvEncode>() {
                encoder = Encoder::Custom(*custom);
            }
            if let Some(custom) = info.get_trait::<TypeTraitEnvDecode>() {
                decoder = Decoder::Custom(*custom);
            }
        }

        Self {
            info,
            encoder,
            decoder,
        }
    }

    fn sequence_encoder(item: Arc<Routines>) -> Encoder {
        if item.encodes_piece() {
            Encoder::Sequence(item)
        } else {
            Encoder::Unsupported
        }
    }

    /// Returns `true` if a value can be written as one sequence item.
    pub(crate) fn encodes_piece(&self) -> bool {
        match &self.encoder {
            Encoder::Scalar | Encoder::Custom(_) => true,
            Encoder::Pointer(pointee) => pointee.encodes_piece(),
            _ => false,
        }
    }

    /// Returns `true` if a value can be read from one sequence item.
    pub(crate) fn decodes_piece(&self) -> bool {
        match &self.decoder {
            Decoder::Scalar | Decoder::Custom(_) => true,
            Decoder::Pointer(pointee) => pointee.decodes_piece(),
            _ => false,
        }
    }

    #[inline]
    pub fn info(&self) -> &'static TypeInfo {
        self.info
    }

    #[inline]
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    #[inline]
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use envio_reflect::derive::Reflect;
    use envio_reflect::info::Typed;
    use envio_reflect::ops::Interface;
    use envio_reflect::registry::{BoxError, EnvDecode, EnvEncode};

    use super::{Decoder, Encoder};
    use crate::Engine;

    #[derive(Reflect, Default)]
    #[reflect(encode, decode)]
    struct Flag(bool);

    impl EnvEncode for Flag {
        fn encode_env(&self) -> Result<Vec<u8>, BoxError> {
            Ok(if self.0 { b"on".to_vec() } else { b"off".to_vec() })
        }
    }

    impl EnvDecode for Flag {
        fn decode_env(raw: &[u8]) -> Result<Self, BoxError> {
            Ok(Self(raw == b"on"))
        }
    }

    #[test]
    fn builtin_kinds() {
        let engine = Engine::new();
        let routines = engine.routines(u32::type_info());
        assert!(matches!(routines.encoder(), Encoder::Scalar));
        assert!(matches!(routines.decoder(), Decoder::Scalar));

        let routines = engine.routines(Interface::type_info());
        assert!(matches!(routines.encoder(), Encoder::Interface));

        let routines = engine.routines(<[i16; 3]>::type_info());
        assert!(matches!(routines.decoder(), Decoder::Array(_)));

        let routines = engine.routines(char::type_info());
        assert!(matches!(routines.encoder(), Encoder::Unsupported));
        assert!(matches!(routines.decoder(), Decoder::Unsupported));
    }

    #[test]
    fn capabilities_override_builtins() {
        let engine = Engine::new();
        let routines = engine.routines(Flag::type_info());
        assert!(matches!(routines.encoder(), Encoder::Custom(_)));
        assert!(matches!(routines.decoder(), Decoder::Custom(_)));

        let routines = engine.routines(<Vec<Flag>>::type_info());
        assert!(matches!(routines.encoder(), Encoder::Sequence(_)));
        assert!(matches!(routines.decoder(), Decoder::List(_)));
    }

    #[test]
    fn nested_sequences_are_unsupported() {
        let engine = Engine::new();
        let routines = engine.routines(<Vec<[u8; 2]>>::type_info());
        assert!(matches!(routines.encoder(), Encoder::Unsupported));
        assert!(matches!(routines.decoder(), Decoder::Unsupported));
    }

    #[test]
    fn derived_once_per_engine() {
        let engine = Engine::new();
        let first = engine.routines(<Option<String>>::type_info());
        let second = engine.routines(<Option<String>>::type_info());
        assert!(alloc::sync::Arc::ptr_eq(&first, &second));

        let Encoder::Pointer(pointee) = first.encoder() else {
            panic!("expected a pointer encoder");
        };
        let direct = engine.routines(String::type_info());
        assert!(alloc::sync::Arc::ptr_eq(pointee, &direct));
    }
}
