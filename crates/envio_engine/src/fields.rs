use alloc::sync::Arc;
use alloc::vec::Vec;

use envio_reflect::info::{StructInfo, TypeInfo};

use crate::routines::Routines;
use crate::tag::Tag;
use crate::Engine;

// -----------------------------------------------------------------------------
// Key

/// The variable a leaf field maps to, with its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Key {
    pub name: &'static str,
    pub mandatory: bool,
    pub raw: bool,
}

// -----------------------------------------------------------------------------
// Field

#[derive(Debug)]
pub(crate) enum FieldKind {
    Leaf(Arc<Routines>),
    Embedded {
        info: &'static StructInfo,
        fields: Arc<[Field]>,
        /// The field is a pointer to the record.
        pointer: bool,
    },
}

/// A record field as seen by the engine.
///
/// Fields are derived once per record type and cached by the [`Engine`].
/// Skipped and unexported fields are not listed. An embedded field carries
/// the fields of the record it flattens.
#[derive(Debug)]
pub struct Field {
    index: usize,
    declared: &'static str,
    key: Key,
    kind: FieldKind,
}

impl Field {
    /// The position of the field in its record.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The name the field is declared with.
    #[inline]
    pub fn declared(&self) -> &'static str {
        self.declared
    }

    /// The variable name: the tag name, or the declared name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.key.name
    }

    #[inline]
    pub fn is_mandatory(&self) -> bool {
        self.key.mandatory
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        self.key.raw
    }

    /// The routines of a leaf field, `None` for an embedded one.
    pub fn routines(&self) -> Option<&Arc<Routines>> {
        match &self.kind {
            FieldKind::Leaf(routines) => Some(routines),
            FieldKind::Embedded { .. } => None,
        }
    }

    /// The flattened fields of an embedded field, `None` for a leaf.
    pub fn embedded(&self) -> Option<&[Field]> {
        match &self.kind {
            FieldKind::Leaf(_) => None,
            FieldKind::Embedded { fields, .. } => Some(fields),
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &Key {
        &self.key
    }

    #[inline]
    pub(crate) fn kind(&self) -> &FieldKind {
        &self.kind
    }
}

// -----------------------------------------------------------------------------
// Derivation

pub(crate) fn derive_fields(engine: &Engine, info: &'static StructInfo) -> Vec<Field> {
    let mut fields = Vec::with_capacity(info.field_len());

    for (index, named) in info.iter().enumerate() {
        let declared = named.name();
        let tag = named.tag().map_or(Tag::DEFAULT, Tag::parse);
        let Tag::Field {
            name,
            mandatory,
            raw,
        } = tag
        else {
            log::trace!("skipping {}.{declared}", info.name());
            continue;
        };

        let target = named.type_info();

        if named.is_flatten() {
            let (record, pointer) = match target {
                TypeInfo::Pointer(pointer) => (pointer.pointee(), true),
                other => (other, false),
            };
            if let TypeInfo::Struct(nested) = record {
                let nested_fields = engine.fields(nested);
                if nested_fields.is_empty() {
                    log::debug!("{}.{declared} embeds no usable field", info.name());
                    continue;
                }
                fields.push(Field {
                    index,
                    declared,
                    key: Key {
                        name: declared,
                        mandatory: false,
                        raw: false,
                    },
                    kind: FieldKind::Embedded {
                        info: nested,
                        fields: nested_fields,
                        pointer,
                    },
                });
                continue;
            }
        }

        if !named.is_exported() {
            continue;
        }

        fields.push(Field {
            index,
            declared,
            key: Key {
                name: name.unwrap_or(declared),
                mandatory,
                raw,
            },
            kind: FieldKind::Leaf(engine.routines(target)),
        });
    }

    fields
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use envio_reflect::derive::Reflect;
    use envio_reflect::info::{TypeInfo, Typed};

    use crate::Engine;

    #[derive(Reflect, Default)]
    struct Inner {
        #[env("INNER_A")]
        pub a: i32,
        b: i32,
    }

    #[derive(Reflect, Default)]
    struct Hidden {
        c: i32,
    }

    #[derive(Reflect, Default)]
    struct Outer {
        #[env("OUTER_A,m,raw")]
        pub a: Vec<u8>,
        #[env(",m")]
        pub b: String,
        #[env("-")]
        pub skipped: i32,
        #[reflect(flatten)]
        inner: Inner,
        #[reflect(flatten)]
        pub boxed: Option<Inner>,
        #[reflect(flatten)]
        pub hidden: Hidden,
        #[reflect(flatten)]
        pub number: u8,
        private: u8,
    }

    fn outer_info() -> &'static envio_reflect::info::StructInfo {
        match Outer::type_info() {
            TypeInfo::Struct(info) => info,
            _ => unreachable!(),
        }
    }

    #[test]
    fn derivation() {
        let engine = Engine::new();
        let fields = engine.fields(outer_info());
        let names: Vec<_> = fields.iter().map(|f| f.declared()).collect();
        assert_eq!(names, ["a", "b", "inner", "boxed", "number"]);

        assert_eq!(fields[0].name(), "OUTER_A");
        assert!(fields[0].is_mandatory() && fields[0].is_raw());

        assert_eq!(fields[1].name(), "b");
        assert!(fields[1].is_mandatory());

        let embedded = fields[2].embedded().unwrap();
        assert_eq!(embedded.len(), 1);
        assert_eq!(embedded[0].name(), "INNER_A");
        assert_eq!(fields[3].index(), 4);
        assert!(fields[3].embedded().is_some());

        assert!(fields[4].routines().is_some());
        assert_eq!(fields[4].index(), 6);
    }

    #[test]
    fn cached_per_type() {
        let engine = Engine::new();
        let first = engine.fields(outer_info());
        let second = engine.fields(outer_info());
        assert!(alloc::sync::Arc::ptr_eq(&first, &second));
    }
}
