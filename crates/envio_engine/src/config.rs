use crate::error::ConfigError;

/// Settings shared by every operation of an [`Engine`](crate::Engine).
///
/// # Examples
///
/// ```
/// use envio_engine::EngineConfig;
///
/// let config = EngineConfig::new().with_separator(b';');
/// assert_eq!(config.separator(), b';');
/// assert!(config.validate().is_ok());
///
/// assert!(EngineConfig::new().with_separator(b'-').validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    separator: u8,
}

impl EngineConfig {
    /// The default sequence separator, `,`.
    pub const DEFAULT_SEPARATOR: u8 = b',';

    /// Creates the default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR,
        }
    }

    /// Sets the byte placed between sequence items.
    #[inline]
    pub const fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    #[inline]
    pub const fn separator(&self) -> u8 {
        self.separator
    }

    /// Checks that the separator can never appear inside a formatted
    /// scalar item.
    ///
    /// Digits, letters, `+`, `-`, `.` and non-ASCII bytes are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.separator;
        let reserved =
            !sep.is_ascii() || sep.is_ascii_alphanumeric() || matches!(sep, b'+' | b'-' | b'.');
        if reserved {
            return Err(ConfigError::ReservedSeparator(char::from(sep)));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
