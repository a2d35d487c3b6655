use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a concrete type: its [`TypeId`] and its path.
///
/// Two `Type`s are equal when their [`TypeId`]s are equal.
///
/// # Example
///
/// ```
/// # use envio_reflect::info::Type;
/// let ty = Type::of::<Vec<String>>();
///
/// assert!(ty.is::<Vec<String>>());
/// assert_eq!(ty.name(), "Vec<String>");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }

    /// Returns the full type path, as reported by [`core::any::type_name`].
    ///
    /// The exact content is not guaranteed to be stable across compilers.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the type path with every module prefix removed,
    /// including the ones inside generic arguments.
    pub fn name(&self) -> String {
        strip_module_paths(self.path)
    }
}

fn strip_module_paths(path: &str) -> String {
    fn push_last_segment(out: &mut String, word: &str) {
        out.push_str(word.rsplit("::").next().unwrap_or(word));
    }

    let mut out = String::with_capacity(path.len());
    let mut start = 0;

    for (index, c) in path.char_indices() {
        if !(c.is_alphanumeric() || c == '_' || c == ':') {
            push_last_segment(&mut out, &path[start..index]);
            out.push(c);
            start = index + c.len_utf8();
        }
    }
    push_last_segment(&mut out, &path[start..]);

    out
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Type").field(&self.path).finish()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path)
    }
}

// -----------------------------------------------------------------------------
// Helper macro

/// Implement `ty`, `ty_id`, `type_path` and `type_is` for an info struct
/// holding a `ty: Type` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the [`Type`](crate::info::Type) of the described type.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the [`TypeId`](core::any::TypeId) of the described type.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns the full path of the described type.
        #[inline]
        pub const fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Check if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::strip_module_paths;

    #[test]
    fn strips_nested_paths() {
        assert_eq!(strip_module_paths("bool"), "bool");
        assert_eq!(strip_module_paths("alloc::string::String"), "String");
        assert_eq!(
            strip_module_paths("core::option::Option<alloc::vec::Vec<my::Pair>>"),
            "Option<Vec<Pair>>"
        );
        assert_eq!(strip_module_paths("[app::Port; 4]"), "[Port; 4]");
        assert_eq!(strip_module_paths("dyn envio_reflect::Reflect"), "dyn Reflect");
    }
}
