//! Generic JSON <-> record marshaling shared by every wire record.
//!
//! A wire record is a struct of optional schema fields plus an `extra` map
//! holding every key the schema does not know about. Hydration never fails:
//! missing keys and values of the wrong JSON type both become `None`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Unrecognized keys of a record, kept verbatim.
pub type Extra = serde_json::Map<String, Value>;

/// Shape a Bot API method promises in `result` on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultKind {
    /// A wire record, named after its schema type.
    Record(&'static str),
    Boolean,
    Integer,
    Text,
    /// A JSON array of the inner shape.
    List(Box<ResultKind>),
    /// Anything; the raw decoded JSON is handed back unchanged.
    Opaque,
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(name) => f.write_str(name),
            Self::Boolean => f.write_str("bool"),
            Self::Integer => f.write_str("integer"),
            Self::Text => f.write_str("string"),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Opaque => f.write_str("any"),
        }
    }
}

/// A type the response envelope can decode a `result` payload into.
pub trait Expected: Sized {
    /// The shape tag reported by the envelope.
    fn kind() -> ResultKind;

    /// Decode `value`, or `None` when it does not have this shape.
    fn from_result(value: &Value) -> Option<Self>;
}

impl Expected for bool {
    fn kind() -> ResultKind {
        ResultKind::Boolean
    }

    fn from_result(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Expected for i64 {
    fn kind() -> ResultKind {
        ResultKind::Integer
    }

    fn from_result(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl Expected for String {
    fn kind() -> ResultKind {
        ResultKind::Text
    }

    fn from_result(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Expected for Value {
    fn kind() -> ResultKind {
        ResultKind::Opaque
    }

    fn from_result(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: Expected> Expected for Vec<T> {
    fn kind() -> ResultKind {
        ResultKind::List(Box::new(T::kind()))
    }

    /// Elements that do not have the shape of `T` are skipped; only a
    /// non-array value fails.
    fn from_result(value: &Value) -> Option<Self> {
        Some(value.as_array()?.iter().filter_map(T::from_result).collect())
    }
}

/// Common behaviour of every schema-defined record.
pub trait WireRecord: Serialize + DeserializeOwned + Default {
    /// Telegram schema name of the record.
    const NAME: &'static str;

    /// Keys present in the source JSON that the schema does not declare.
    fn extra(&self) -> &Extra;

    /// Build a record from a loosely typed JSON value. Total: a non-object
    /// input yields the empty record.
    fn hydrate(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Look up an unrecognized key under its original name.
    fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra().get(key)
    }

    /// Flatten the record back into a JSON object.
    fn to_value(&self) -> Value {
        crate::helper::to_json_value(self)
    }
}

/// Field deserializer that degrades a value of the wrong type to `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Declare a wire record: every listed field becomes an optional, leniently
/// decoded, skip-if-none member, and a flattened `extra` map is appended.
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(
                    default,
                    deserialize_with = "crate::record::lenient",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $field: Option<$ty>,
            )*
            /// Keys not covered by the schema fields.
            #[serde(flatten)]
            pub extra: $crate::record::Extra,
        }

        impl $crate::record::WireRecord for $name {
            const NAME: &'static str = stringify!($name);

            fn extra(&self) -> &$crate::record::Extra {
                &self.extra
            }
        }

        impl $crate::record::Expected for $name {
            fn kind() -> $crate::record::ResultKind {
                $crate::record::ResultKind::Record(stringify!($name))
            }

            fn from_result(value: &serde_json::Value) -> Option<Self> {
                value
                    .is_object()
                    .then(|| <Self as $crate::record::WireRecord>::hydrate(value))
            }
        }
    };
}
