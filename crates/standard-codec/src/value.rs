//! [`WireValue`] — the dynamically-typed value model carried by the codec.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// The closed set of value kinds the standard codec can carry.
///
/// One variant per wire tag. Values are transient: built right before an
/// encode or right after a decode, owned entirely by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Null.
    Null,
    /// Boolean.
    Bool(bool),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// Arbitrary-precision integer as its decimal string form
    /// (optional leading `-`, then digits).
    BigInt(String),
    /// 64-bit floating point number.
    F64(f64),
    /// UTF-8 string.
    Str(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Packed 32-bit integer array.
    I32Array(Vec<i32>),
    /// Packed 64-bit integer array.
    I64Array(Vec<i64>),
    /// Packed 64-bit float array.
    F64Array(Vec<f64>),
    /// Ordered sequence of values.
    List(Vec<WireValue>),
    /// Key/value pairs in insertion order. Keys may be any value. A
    /// conforming encoder writes unique keys; the decoder preserves
    /// duplicates in wire order, so consumers that index by key see
    /// last-write-wins.
    Map(Vec<(WireValue, WireValue)>),
}

impl From<bool> for WireValue {
    fn from(v: bool) -> Self {
        WireValue::Bool(v)
    }
}

impl From<i32> for WireValue {
    fn from(v: i32) -> Self {
        WireValue::I32(v)
    }
}

impl From<i64> for WireValue {
    fn from(v: i64) -> Self {
        WireValue::I64(v)
    }
}

impl From<f64> for WireValue {
    fn from(v: f64) -> Self {
        WireValue::F64(v)
    }
}

impl From<&str> for WireValue {
    fn from(v: &str) -> Self {
        WireValue::Str(v.to_owned())
    }
}

impl From<String> for WireValue {
    fn from(v: String) -> Self {
        WireValue::Str(v)
    }
}

impl From<Vec<u8>> for WireValue {
    fn from(v: Vec<u8>) -> Self {
        WireValue::Bytes(v)
    }
}

impl From<serde_json::Value> for WireValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => WireValue::Null,
            serde_json::Value::Bool(b) => WireValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    match i32::try_from(i) {
                        Ok(small) => WireValue::I32(small),
                        Err(_) => WireValue::I64(i),
                    }
                } else if let Some(u) = n.as_u64() {
                    // Above i64::MAX: only the big-integer form can hold it.
                    WireValue::BigInt(u.to_string())
                } else {
                    WireValue::F64(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => WireValue::Str(s),
            serde_json::Value::Array(arr) => {
                WireValue::List(arr.into_iter().map(WireValue::from).collect())
            }
            serde_json::Value::Object(obj) => WireValue::Map(
                obj.into_iter()
                    .map(|(k, v)| (WireValue::Str(k), WireValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<WireValue> for serde_json::Value {
    fn from(v: WireValue) -> Self {
        match v {
            WireValue::Null => serde_json::Value::Null,
            WireValue::Bool(b) => serde_json::Value::Bool(b),
            WireValue::I32(i) => serde_json::json!(i),
            WireValue::I64(i) => serde_json::json!(i),
            WireValue::BigInt(digits) => match digits.parse::<i64>() {
                Ok(i) => serde_json::json!(i),
                Err(_) => serde_json::Value::String(digits),
            },
            WireValue::F64(f) => serde_json::json!(f),
            WireValue::Str(s) => serde_json::Value::String(s),
            WireValue::Bytes(b) => {
                let b64 = BASE64.encode(&b);
                serde_json::Value::String(format!("data:application/octet-stream;base64,{}", b64))
            }
            WireValue::I32Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(|i| serde_json::json!(i)).collect())
            }
            WireValue::I64Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(|i| serde_json::json!(i)).collect())
            }
            WireValue::F64Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(|f| serde_json::json!(f)).collect())
            }
            WireValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            WireValue::Map(pairs) => {
                let mut obj = serde_json::Map::new();
                for (k, v) in pairs {
                    let key = match k {
                        WireValue::Str(s) => s,
                        // Non-string keys render as the JSON text of the key.
                        other => serde_json::Value::from(other).to_string(),
                    };
                    obj.insert(key, serde_json::Value::from(v));
                }
                serde_json::Value::Object(obj)
            }
        }
    }
}
