use alloc::string::String;
use core::fmt;
use core::num::{ParseFloatError, ParseIntError};

use envio_reflect::info::{StructInfo, TypeInfo};
use envio_reflect::registry::BoxError;
use thiserror::Error;

use crate::Field;

// -----------------------------------------------------------------------------
// Op

/// The direction of a failed field operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Decoding, from the store into a value.
    Get,
    /// Encoding, from a value into the store.
    Set,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.pad("get data into"),
            Self::Set => f.pad("set data from"),
        }
    }
}

// -----------------------------------------------------------------------------
// EnvError

/// The error returned by [`Engine::get`](crate::Engine::get) and
/// [`Engine::set`](crate::Engine::set).
///
/// Structural failures are reported bare. Failures tied to one value
/// (parsing, capacity, user conversions, the store) come wrapped in
/// [`EnvError::Field`] with the record, field and type involved.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    #[error("env: the required variable ${name} is missing")]
    MissingRequired { name: &'static str },

    #[error("env: unsupported type {type_name}")]
    UnsupportedType { type_name: String },

    #[error("env: nil interface value")]
    NilInterface,

    #[error("env: pointer to embedded struct is nil: {type_name}")]
    NilEmbeddedPointer { type_name: String },

    #[error("env: cannot {op} struct field {record}.{name} of type {type_name}: {source}")]
    Field {
        op: Op,
        /// The record declaring the field.
        record: &'static str,
        /// The declared field name.
        field: &'static str,
        /// The variable name.
        name: &'static str,
        type_name: String,
        source: FieldError,
    },
}

// -----------------------------------------------------------------------------
// FieldError

/// The cause of an [`EnvError::Field`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("invalid syntax")]
    InvalidSyntax,

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    #[error("value out of range")]
    FloatOutOfRange,

    #[error("invalid UTF-8")]
    InvalidUtf8,

    #[error("index out of range: {len} elements for a capacity of {capacity}")]
    IndexOutOfRange { len: usize, capacity: usize },

    #[error("value does not match its type description")]
    KindMismatch,

    #[error(transparent)]
    Custom(BoxError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// -----------------------------------------------------------------------------
// StoreError

/// A write rejected by an [`EnvStore`](crate::EnvStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("invalid variable name {0:?}")]
    InvalidName(String),

    #[error("the value of {0} contains a NUL byte")]
    NulInValue(String),

    #[error("the value of {0} is not valid UTF-8")]
    NonUtf8Value(String),
}

// -----------------------------------------------------------------------------
// ConfigError

/// An invalid [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("separator {0:?} is reserved by scalar formatting")]
    ReservedSeparator(char),
}

// -----------------------------------------------------------------------------
// Fault

/// A failure below the record level, before the field it happened in
/// is known.
#[derive(Debug)]
pub(crate) enum Fault {
    Env(EnvError),
    Field {
        info: &'static TypeInfo,
        error: FieldError,
    },
}

impl Fault {
    #[inline]
    pub fn field(info: &'static TypeInfo, error: impl Into<FieldError>) -> Self {
        Self::Field {
            info,
            error: error.into(),
        }
    }

    #[inline]
    pub fn unsupported(info: &'static TypeInfo) -> Self {
        Self::Env(EnvError::unsupported(info))
    }

    /// A record value with no slot at the index its description gives.
    pub fn missing_slot(record: &'static StructInfo, field: &Field) -> Self {
        match record.field_at(field.index()) {
            Some(described) => Self::field(described.type_info(), FieldError::KindMismatch),
            None => Self::Env(EnvError::UnsupportedType {
                type_name: record.ty().name(),
            }),
        }
    }

    /// Attaches the field context.
    pub fn into_env(self, op: Op, record: &'static StructInfo, field: &Field) -> EnvError {
        match self {
            Self::Env(error) => error,
            Self::Field { info, error } => EnvError::Field {
                op,
                record: record.name(),
                field: field.declared(),
                name: field.name(),
                type_name: info.ty().name(),
                source: error,
            },
        }
    }
}

impl From<EnvError> for Fault {
    #[inline]
    fn from(error: EnvError) -> Self {
        Self::Env(error)
    }
}

impl EnvError {
    #[cold]
    pub(crate) fn unsupported(info: &TypeInfo) -> Self {
        Self::UnsupportedType {
            type_name: info.ty().name(),
        }
    }
}
