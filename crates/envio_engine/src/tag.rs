// -----------------------------------------------------------------------------
// Tag

/// A parsed `env` field tag.
///
/// The grammar is `name[,flag]*`. The first component is always the name,
/// even when it is empty or spells a flag. Recognized flags are `m`
/// (mandatory) and `raw`; others are ignored. A tag made of `-` alone
/// removes the field from the engine's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    Skip,
    Field {
        /// The explicit variable name, `None` when the component is empty.
        name: Option<&'a str>,
        mandatory: bool,
        raw: bool,
    },
}

impl<'a> Tag<'a> {
    /// The tag of a field that declares none.
    pub const DEFAULT: Self = Self::Field {
        name: None,
        mandatory: false,
        raw: false,
    };

    /// Parses a tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use envio_engine::Tag;
    ///
    /// assert_eq!(Tag::parse("-"), Tag::Skip);
    /// assert_eq!(
    ///     Tag::parse("DATA,raw,m"),
    ///     Tag::Field { name: Some("DATA"), mandatory: true, raw: true },
    /// );
    /// assert_eq!(
    ///     Tag::parse(",m"),
    ///     Tag::Field { name: None, mandatory: true, raw: false },
    /// );
    /// ```
    pub fn parse(tag: &'a str) -> Self {
        if tag == "-" {
            return Self::Skip;
        }

        let mut parts = tag.split(',');
        let name = parts.next().filter(|name| !name.is_empty());

        let mut mandatory = false;
        let mut raw = false;
        for flag in parts {
            match flag {
                "m" => mandatory = true,
                "raw" => raw = true,
                _ => {}
            }
        }

        Self::Field {
            name,
            mandatory,
            raw,
        }
    }

    /// Returns `true` for [`Tag::Skip`].
    #[inline]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn name_only() {
        assert_eq!(
            Tag::parse("HOST"),
            Tag::Field {
                name: Some("HOST"),
                mandatory: false,
                raw: false
            }
        );
    }

    #[test]
    fn first_component_is_never_a_flag() {
        assert_eq!(
            Tag::parse("m"),
            Tag::Field {
                name: Some("m"),
                mandatory: false,
                raw: false
            }
        );
        assert_eq!(
            Tag::parse("raw,m"),
            Tag::Field {
                name: Some("raw"),
                mandatory: true,
                raw: false
            }
        );
    }

    #[test]
    fn unknown_flags_are_ignored() {
        assert_eq!(
            Tag::parse("A,omitempty,raw"),
            Tag::Field {
                name: Some("A"),
                mandatory: false,
                raw: true
            }
        );
    }

    #[test]
    fn empty_tag_is_default() {
        assert_eq!(Tag::parse(""), Tag::DEFAULT);
        assert!(!Tag::parse("-,m").is_skip());
        assert!(Tag::parse("-").is_skip());
    }
}
