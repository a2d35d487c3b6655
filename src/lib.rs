//! Environment variable marshaling for plain Rust records.
//!
//! Derive [`Reflect`] on a struct, then move it to and from the environment
//! with [`get`] and [`set`], or through an [`Engine`] and any [`EnvStore`].
//!
//! ```
//! use envio::{Engine, MemoryEnv, Reflect};
//!
//! #[derive(Reflect, Default)]
//! struct Config {
//!     #[env("APP_HOST,m")]
//!     pub host: String,
//!     #[env("APP_PORT")]
//!     pub port: u16,
//!     #[env("APP_PEERS")]
//!     pub peers: Vec<String>,
//! }
//!
//! let env = MemoryEnv::new()
//!     .with_var("APP_HOST", "0.0.0.0")
//!     .with_var("APP_PEERS", "a.local,b.local");
//!
//! let mut config = Config { port: 8080, ..Config::default() };
//! Engine::new().get_with(&env, &mut config).unwrap();
//!
//! assert_eq!(config.host, "0.0.0.0");
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.peers, ["a.local", "b.local"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use envio_engine::*;
pub use envio_reflect as reflect;
pub use envio_reflect::derive::Reflect;
pub use envio_reflect::registry::{BoxError, EnvDecode, EnvEncode};
pub use envio_utils as utils;
