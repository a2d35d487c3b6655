use alloc::vec::Vec;

use envio_reflect::Reflect;
use envio_reflect::info::StructInfo;
use envio_reflect::ops::{Array, List, ReflectMut, Struct, UintMut};

use crate::Engine;
use crate::error::{EnvError, FieldError, Fault, Op};
use crate::fields::{Field, FieldKind, Key};
use crate::routines::{Decoder, Routines};
use crate::scalar;
use crate::store::EnvStore;

// -----------------------------------------------------------------------------
// Decode

/// One decoding pass, from a store into a record.
pub(crate) struct Decode<'a> {
    engine: &'a Engine,
    store: &'a dyn EnvStore,
    separator: u8,
}

impl<'a> Decode<'a> {
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
        value: &mut dyn Struct,
    ) -> Result<(), EnvError> {
        for field in fields {
            let Some(slot) = value.field_at_mut(field.index()) else {
                return Err(Fault::missing_slot(info, field).into_env(Op::Get, info, field));
            };
            match field.kind() {
                FieldKind::Embedded {
                    info: nested,
                    fields,
                    pointer,
                } => self.embedded(nested, fields, *pointer, slot)?,
                FieldKind::Leaf(routines) => self
                    .value(routines, field.key(), slot)
                    .map_err(|fault| fault.into_env(Op::Get, info, field))?,
            }
        }
        Ok(())
    }

    fn embedded(
        &self,
        info: &'static StructInfo,
        fields: &[Field],
        pointer: bool,
        slot: &mut dyn Reflect,
    ) -> Result<(), EnvError> {
        let slot_info = slot.reflect_type_info();
        if pointer {
            let ReflectMut::Pointer(ptr) = slot.reflect_mut() else {
                return Err(EnvError::unsupported(slot_info));
            };
            let Some(pointee) = ptr.pointee_mut() else {
                return Err(EnvError::NilEmbeddedPointer {
                    type_name: slot_info.ty().name(),
                });
            };
            return match pointee.reflect_mut() {
                ReflectMut::Struct(record) => self.record(info, fields, record),
                _ => Err(EnvError::unsupported(slot_info)),
            };
        }
        match slot.reflect_mut() {
            ReflectMut::Struct(record) => self.record(info, fields, record),
            _ => Err(EnvError::unsupported(slot_info)),
        }
    }

    /// Reads a variable. Absent and empty values read as empty, which is an
    /// error for mandatory fields.
    fn read(&self, key: &Key) -> Result<Vec<u8>, Fault> {
        let raw = self.store.read(key.name).unwrap_or_default();
        if raw.is_empty() && key.mandatory {
            return Err(Fault::Env(EnvError::MissingRequired { name: key.name }));
        }
        Ok(raw)
    }

    fn value(&self, routines: &Routines, key: &Key, value: &mut dyn Reflect) -> Result<(), Fault> {
        let info = routines.info();
        match routines.decoder() {
            Decoder::Scalar => {
                let raw = self.read(key)?;
                if raw.is_empty() {
                    return Ok(());
                }
                scalar::decode(&raw, value.reflect_mut()).map_err(|e| Fault::field(info, e))
            }
            Decoder::Custom(custom) => {
                let raw = self.read(key)?;
                custom
                    .decode(&raw, value)
                    .map_err(|e| Fault::field(info, FieldError::Custom(e)))
            }
            Decoder::Pointer(pointee) => {
                let ReflectMut::Pointer(ptr) = value.reflect_mut() else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                if let Some(current) = ptr.pointee_mut() {
                    return self.value(pointee, key, current);
                }
                let mut fresh = ptr.new_pointee();
                self.value(pointee, key, &mut *fresh)?;
                if !fresh.reflect_is_zero() {
                    ptr.set_pointee(fresh)
                        .map_err(|_| Fault::field(info, FieldError::KindMismatch))?;
                }
                Ok(())
            }
            Decoder::Interface => {
                let ReflectMut::Interface(held) = value.reflect_mut() else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                let Some(held) = held else {
                    return Err(Fault::Env(EnvError::NilInterface));
                };
                let routines = self.engine.routines(held.reflect_type_info());
                self.value(&routines, key, held)
            }
            Decoder::Array(item) => {
                let raw = self.read(key)?;
                if raw.is_empty() {
                    return Ok(());
                }
                let ReflectMut::Array(array) = value.reflect_mut() else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                self.fill_array(item, key.raw, &raw, array)
                    .map_err(|e| Fault::field(info, e))
            }
            Decoder::List(item) => {
                let raw = self.read(key)?;
                if raw.is_empty() {
                    return Ok(());
                }
                let ReflectMut::List(list) = value.reflect_mut() else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                self.fill_list(item, key.raw, &raw, list)
                    .map_err(|e| Fault::field(info, e))
            }
            Decoder::Struct => {
                let (Ok(record_info), ReflectMut::Struct(record)) =
                    (info.as_struct(), value.reflect_mut())
                else {
                    return Err(Fault::field(info, FieldError::KindMismatch));
                };
                let fields = self.engine.fields(record_info);
                self.record(record_info, &fields, record).map_err(Fault::Env)
            }
            Decoder::Unsupported => Err(Fault::unsupported(info)),
        }
    }

    // -------------------------------------------------------------------------
    // Sequences

    fn fill_array(
        &self,
        item: &Routines,
        raw_mode: bool,
        raw: &[u8],
        array: &mut dyn Array,
    ) -> Result<(), FieldError> {
        let capacity = array.len();

        if raw_mode && item.info().is_byte() {
            if raw.len() > capacity {
                return Err(FieldError::IndexOutOfRange {
                    len: raw.len(),
                    capacity,
                });
            }
            return raw
                .iter()
                .enumerate()
                .try_for_each(|(index, byte)| set_byte(array.get_mut(index), *byte));
        }

        let count = raw.split(|b| *b == self.separator).count();
        if count > capacity {
            return Err(FieldError::IndexOutOfRange {
                len: count,
                capacity,
            });
        }
        for (index, piece) in raw.split(|b| *b == self.separator).enumerate() {
            let slot = array.get_mut(index).ok_or(FieldError::KindMismatch)?;
            self.piece(item, piece, slot)?;
        }
        Ok(())
    }

    fn fill_list(
        &self,
        item: &Routines,
        raw_mode: bool,
        raw: &[u8],
        list: &mut dyn List,
    ) -> Result<(), FieldError> {
        if raw_mode && item.info().is_byte() {
            list.reset(raw.len());
            return raw
                .iter()
                .enumerate()
                .try_for_each(|(index, byte)| set_byte(list.get_mut(index), *byte));
        }

        let count = raw.split(|b| *b == self.separator).count();
        list.reset(count);
        for (index, piece) in raw.split(|b| *b == self.separator).enumerate() {
            let slot = list.get_mut(index).ok_or(FieldError::KindMismatch)?;
            self.piece(item, piece, slot)?;
        }
        Ok(())
    }

    /// Decodes one sequence item. Empty pieces are parsed like any other.
    fn piece(
        &self,
        item: &Routines,
        piece: &[u8],
        slot: &mut dyn Reflect,
    ) -> Result<(), FieldError> {
        match item.decoder() {
            Decoder::Scalar => scalar::decode(piece, slot.reflect_mut()),
            Decoder::Custom(custom) => custom.decode(piece, slot).map_err(FieldError::Custom),
            Decoder::Pointer(pointee) => {
                let ReflectMut::Pointer(ptr) = slot.reflect_mut() else {
                    return Err(FieldError::KindMismatch);
                };
                let mut fresh = ptr.new_pointee();
                self.piece(pointee, piece, &mut *fresh)?;
                ptr.set_pointee(fresh).map_err(|_| FieldError::KindMismatch)
            }
            _ => Err(FieldError::KindMismatch),
        }
    }
}

fn set_byte(slot: Option<&mut dyn Reflect>, byte: u8) -> Result<(), FieldError> {
    match slot.map(|slot| slot.reflect_mut()) {
        Some(ReflectMut::Uint(UintMut::U8(value))) => {
            *value = byte;
            Ok(())
        }
        _ => Err(FieldError::KindMismatch),
    }
}
