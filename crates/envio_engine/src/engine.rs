use alloc::sync::Arc;
use std::sync::OnceLock;

use envio_reflect::Reflect;
use envio_reflect::info::{StructInfo, TypeInfo};
use envio_reflect::ops::{ReflectMut, ReflectRef};

use crate::cache::Cache;
use crate::config::EngineConfig;
use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{ConfigError, EnvError};
use crate::fields::{Field, derive_fields};
use crate::routines::Routines;
use crate::store::{EnvStore, ProcessEnv};

// -----------------------------------------------------------------------------
// Engine

struct Inner {
    config: EngineConfig,
    fields: Cache<[Field]>,
    routines: Cache<Routines>,
}

/// Moves record values to and from an [`EnvStore`].
///
/// An engine owns the per-type caches: field lists and routine pairs are
/// derived on first use and shared by every later operation, from any
/// thread. Cloning an engine is cheap and shares the caches.
///
/// # Examples
///
/// ```
/// use envio_engine::{Engine, MemoryEnv};
/// use envio_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Server {
///     #[env("HOST,m")]
///     pub host: String,
///     #[env("PORTS")]
///     pub ports: Vec<u16>,
/// }
///
/// let engine = Engine::new();
/// let env = MemoryEnv::new().with_var("HOST", "example.org");
///
/// let mut server = Server::default();
/// engine.get_with(&env, &mut server).unwrap();
/// assert_eq!(server.host, "example.org");
/// assert!(server.ports.is_empty());
///
/// server.ports = vec![80, 443];
/// engine.set_with(&env, &server).unwrap();
/// assert_eq!(env.get("PORTS").as_deref(), Some("80,443"));
/// ```
#[derive(Clone)]
pub struct Engine {
    inner: Arc<Inner>,
}

impl Engine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::from_config(EngineConfig::new())
    }

    /// Creates an engine after validating `config`.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                fields: Cache::new("fields"),
                routines: Cache::new("routines"),
            }),
        }
    }

    /// The process-wide engine used by [`get`](crate::get) and [`set`](crate::set).
    pub fn global() -> &'static Engine {
        static GLOBAL: OnceLock<Engine> = OnceLock::new();
        GLOBAL.get_or_init(Engine::new)
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Writes every field of `value` to the process environment.
    #[inline]
    pub fn set(&self, value: &dyn Reflect) -> Result<(), EnvError> {
        self.set_with(&ProcessEnv, value)
    }

    /// Fills `value` from the process environment.
    #[inline]
    pub fn get(&self, value: &mut dyn Reflect) -> Result<(), EnvError> {
        self.get_with(&ProcessEnv, value)
    }

    /// Writes every field of the record `value` to `store`.
    ///
    /// Mandatory fields holding their zero value are not written, so a
    /// value set earlier survives. Writes done before a failure are kept.
    pub fn set_with(&self, store: &dyn EnvStore, value: &dyn Reflect) -> Result<(), EnvError> {
        let info = value.reflect_type_info();
        let (TypeInfo::Struct(info), ReflectRef::Struct(record)) = (info, value.reflect_ref())
        else {
            return Err(EnvError::unsupported(info));
        };
        log::trace!("encoding {}", info.name());
        Encode::new(self, store).record(info, &self.fields(info), record)
    }

    /// Fills the record `value` from `store`.
    ///
    /// Absent variables leave their field untouched, unless the field is
    /// mandatory. Fields decoded before a failure keep their new value.
    pub fn get_with(&self, store: &dyn EnvStore, value: &mut dyn Reflect) -> Result<(), EnvError> {
        let info = value.reflect_type_info();
        let (TypeInfo::Struct(info), ReflectMut::Struct(record)) = (info, value.reflect_mut())
        else {
            return Err(EnvError::unsupported(info));
        };
        log::trace!("decoding {}", info.name());
        Decode::new(self, store).record(info, &self.fields(info), record)
    }

    /// Returns the cached routines of a type, deriving them on first use.
    pub fn routines(&self, info: &'static TypeInfo) -> Arc<Routines> {
        self.inner
            .routines
            .get_or_derive(info.ty(), || Arc::new(Routines::derive(self, info)))
    }

    /// Returns the cached fields of a record type, deriving them on first use.
    pub fn fields(&self, info: &'static StructInfo) -> Arc<[Field]> {
        self.inner
            .fields
            .get_or_derive(info.ty(), || Arc::from(derive_fields(self, info)))
    }
}

impl Default for Engine {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.inner.config)
            .field("fields", &self.inner.fields.len())
            .field("routines", &self.inner.routines.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
