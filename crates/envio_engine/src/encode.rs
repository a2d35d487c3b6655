use alloc::boxed::Box;
use alloc::vec::Vec;

use envio_reflect::Reflect;
use envio_reflect::info::StructInfo;
use envio_reflect::ops::{Array, ArrayItemIter, ReflectRef, Struct};

use crate::Engine;
use crate::error::{EnvError, FieldError, Fault, Op};
use crate::fields::{Field, FieldKind, Key};
use crate::routines::{Encoder, Routines};
use crate::scalar;
use crate::store::EnvStore;

// -----------------------------------------------------------------------------
// Encode

/// One encoding pass, from a record into a store.
pub(crate) struct Encode<'a> {
    engine: &'a Engine,
    store: &'a dyn EnvStore,
    separator: u8,
}

impl<'a> Encode<'a> {
    pub fn new(engine: &'a Engine, store: &'a dyn EnvStore) -> Self {
        Self {
            engine,
            store,
            separator: engine.config().separator(),
        }
    }

    pub fn record(
        &self,
        info: &'static StructInfo,
        fields: &[Field],
        value: &dyn Struct,
    ) -> Result<(), EnvError> {
        for field in fields {
            let Some(slot) = value.field_at(field.index()) else {
                return Err(Fault::missing_slot(info, field).into_env(Op::Set, info, field));
            };
            if field.is_mandatory() && slot.reflect_is_zero() {
                continue;
            }
            match field.kind() {
                FieldKind::Embedded {
                    info: nested,
                    fields,
                    pointer,
                } => self.embedded(nested, fields, *pointer, slot)?,
                FieldKind::Leaf(routines) => self
                    .value(routines, field.key(), slot)
                    .map_err(|fault| fault.into_env(Op::Set, info, field))?,
            }
        }
        Ok(())
    }

    /// A null embedded pointer is encoded as a zero record.
    fn embedded(
        &self,
        info: &'static StructInfo,
        fields: &[Field],
        pointer: bool,
        slot: &dyn Reflect,
    ) -> Result<(), EnvError> {
        let slot_info = slot.reflect_type_info();
        let zero: Box<dyn Reflect>;
        let target = match (pointer, slot.reflect_ref()) {
            (false, _) => slot,
            (true, ReflectRef::Pointer(ptr)) => match ptr.pointee() {
                Some(pointee) => pointee,
                None => {
                    zero = ptr.new_pointee();
                    &*zero
                }
            },
            (true, _) => return Err(EnvError::unsupported(slot_info)),
        };
        match target.reflect_ref() {
            ReflectRef::Struct(record) => self.record(info, fields, record),
            _ => Err(EnvError::unsupported(slot_info)),
        }
    }

    fn write(&self, routines: &Routines, key: &Key, bytes: &[u8]) -> Result<(), Fault> {
        self.store
            .write(key.name, bytes)
            .map_err(|e| Fault::field(routines.info(), e))
    }

    fn value(&self, routines: &Routines, key: &Key, value: &dyn Reflect) -> Result<(), Fault> {
        let info = routines.info();
        match routines.encoder() {
            Encoder::Scalar => {
                let mut out = Vec::new();
                scalar::encode(value.reflect_ref(), &mut out).map_err(|e| Fault::field(info, e))?;
                self.write(routines, key, &out)
            }
            Encoder::Custom(custom) => {
                let out = custom
                    .encode(value)
                    .map_err(|e| Fault::field(info, FieldError::Custom(e)))?;
                self.write(routines, key, &out)
            }
            Encoder::Pointer(pointee) => {
                let ReflectRef::Pointer(ptr) = value.reflect_ref() else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                match ptr.pointee() {
                    Some(current) => self.value(pointee, key, current),
                    None => self.value(pointee, key, &*ptr.new_pointee()),
                }
            }
            Encoder::Interface => {
                let ReflectRef::Interface(held) = value.reflect_ref() else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                let Some(held) = held else {
                    return Err(Fault::Env(EnvError::NilInterface));
                };
                let routines = self.engine.routines(held.reflect_type_info());
                self.value(&routines, key, held)
            }
            Encoder::Sequence(item) => {
                let items: &dyn Array = match value.reflect_ref() {
                    ReflectRef::Array(array) => array,
                    ReflectRef::List(list) => list,
                    _ => return Err(Fault::field(info, FieldError::KindMismatch)),
                };
                let mut out = Vec::new();
                self.join(item, key.raw, items, &mut out)
                    .map_err(|e| Fault::field(info, e))?;
                self.write(routines, key, &out)
            }
            Encoder::Struct => {
                let (Ok(record_info), ReflectRef::Struct(record)) =
                    (info.as_struct(), value.reflect_ref())
                else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                let fields = self.engine.fields(record_info);
                self.record(record_info, &fields, record).map_err(Fault::Env)
            }
            Encoder::Unsupported => Err(Fault::unsupported(info)),
        }
    }

    // -------------------------------------------------------------------------
    // Sequences

    fn join(
        &self,
        item: &Routines,
        raw_mode: bool,
        items: &dyn Array,
        out: &mut Vec<u8>,
    ) -> Result<(), FieldError> {
        if raw_mode && item.info().is_byte() {
            for value in ArrayItemIter::new(items) {
                match value.reflect_ref() {
                    ReflectRef::Uint(byte) => {
                        out.push(u8::try_from(byte).map_err(|_| FieldError::KindMismatch)?);
                    }
                    _ => return Err(FieldError::KindMismatch),
                }
            }
            return Ok(());
        }

        for (index, value) in ArrayItemIter::new(items).enumerate() {
            if index > 0 {
                out.push(self.separator);
            }
            self.piece(item, value, out)?;
        }
        Ok(())
    }

    fn piece(
        &self,
        item: &Routines,
        value: &dyn Reflect,
        out: &mut Vec<u8>,
    ) -> Result<(), FieldError> {
        match item.encoder() {
            Encoder::Scalar => scalar::encode(value.reflect_ref(), out),
            Encoder::Custom(custom) => {
                out.extend(custom.encode(value).map_err(FieldError::Custom)?);
                Ok(())
            }
            Encoder::Pointer(pointee) => {
                let ReflectRef::Pointer(ptr) = value.reflect_ref() else {
                    return Err(FieldError::KindMismatch);
                };
                match ptr.pointee() {
                    Some(current) => self.piece(pointee, current, out),
                    None => self.piece(pointee, &*ptr.new_pointee(), out),
                }
            }
            _ => Err(FieldError::KindMismatch),
        }
    }
}
