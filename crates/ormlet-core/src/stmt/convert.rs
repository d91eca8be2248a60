//! Conversions between Rust primitives and [`Value`].

use super::{Type, Value};
use crate::{Error, Result};

/// A Rust type that can be stored in a single column.
pub trait Primitive: Sized {
    /// Field kind handed to the dialect for the column type.
    const TYPE: Type;

    /// Load an instance from a value read back from the database.
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_integer {
    ( $( $ty:ident => $variant:ident, )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Value::$variant(*value)
                }
            }

            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    match value.as_integer().map($ty::try_from) {
                        Some(Ok(v)) => Ok(v),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl Primitive for bool {
    const TYPE: Type = Type::Bool;

    fn load(value: Value) -> Result<Self> {
        match value.as_integer() {
            Some(v) => Ok(v != 0),
            None => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::F32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl Primitive for f32 {
    const TYPE: Type = Type::F32;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            _ => match value.as_integer() {
                Some(v) => Ok(v as f32),
                None => Err(Error::type_conversion(value, "f32")),
            },
        }
    }
}

impl Primitive for f64 {
    const TYPE: Type = Type::F64;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v as f64),
            Value::F64(v) => Ok(v),
            _ => match value.as_integer() {
                Some(v) => Ok(v as f64),
                None => Err(Error::type_conversion(value, "f64")),
            },
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl From<jiff::Timestamp> for Value {
    fn from(value: jiff::Timestamp) -> Self {
        Value::Timestamp(value)
    }
}

impl Primitive for jiff::Timestamp {
    const TYPE: Type = Type::Timestamp;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            // Text storage round-trips through RFC 3339
            Value::String(ref s) => match s.parse() {
                Ok(v) => Ok(v),
                Err(_) => Err(Error::type_conversion(value, "jiff::Timestamp")),
            },
            _ => Err(Error::type_conversion(value, "jiff::Timestamp")),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
