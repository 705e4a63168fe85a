//! Runtime key-type guard
//!
//! The map only stores string keys. Lookups accept anything implementing [`KeyLike`] so that
//! callers holding loosely typed keys get a [`MapError::InvalidKeyType`] instead of a silent
//! miss.

use crate::MapError;
use std::{any::type_name, borrow::Cow, rc::Rc, sync::Arc};

/// A value that may be used as a map key.
///
/// String types yield `Some`, every other implementor yields `None` and is rejected.
pub trait KeyLike {
    /// Returns the key as a string slice if this value is a string
    fn key_str(&self) -> Option<&str>;

    /// Returns the key as a string slice or the `InvalidKeyType` error
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when the value is not a string.
    fn try_key_str(&self) -> Result<&str, MapError> {
        self.key_str().ok_or(MapError::InvalidKeyType { type_name: type_name::<Self>() })
    }
}

impl KeyLike for str {
    fn key_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl KeyLike for String {
    fn key_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl KeyLike for Cow<'_, str> {
    fn key_str(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl KeyLike for Box<str> {
    fn key_str(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl KeyLike for Rc<str> {
    fn key_str(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl KeyLike for Arc<str> {
    fn key_str(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<T: KeyLike + ?Sized> KeyLike for &T {
    fn key_str(&self) -> Option<&str> {
        (**self).key_str()
    }

    fn try_key_str(&self) -> Result<&str, MapError> {
        (**self).try_key_str()
    }
}

impl<T: KeyLike> KeyLike for Option<T> {
    fn key_str(&self) -> Option<&str> {
        self.as_ref().and_then(KeyLike::key_str)
    }
}

/// Implements `KeyLike` for types that are never valid keys
macro_rules! reject_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl KeyLike for $ty {
                fn key_str(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

reject_key!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, ()
);
