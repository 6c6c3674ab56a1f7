use std::collections::btree_map;
use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::token::AccessToken;

/// A single query-string value. The API accepts integers, text, and raw
/// byte sequences; anything else is not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
}

impl ParamValue {
    /// Render the value as a single query-string token: integers in
    /// base-10, text verbatim, bytes as their decoded text.
    fn render(&self) -> String {
        match self {
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Text(s) => s.clone(),
            ParamValue::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(b: Vec<u8>) -> Self {
        ParamValue::Bytes(b)
    }
}

impl From<&[u8]> for ParamValue {
    fn from(b: &[u8]) -> Self {
        ParamValue::Bytes(b.to_vec())
    }
}

/// Request parameters for the activity list endpoints.
///
/// Keys are unordered and unique: setting a key twice keeps the last value.
///
/// # Example
///
/// ```
/// use nikeplus::Params;
///
/// let params = Params::new().set("count", 5).set("startDate", "2013-09-01");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Params::default()
    }

    /// Set a parameter, replacing any previous value under the same key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the parameter set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.entries.iter()
    }
}

/// Build the canonical query string for an authenticated request:
/// `access_token` plus the rendered parameter entries, sorted by key and
/// percent-escaped. An entry named `access_token` in the bag replaces the
/// session token, last write wins.
pub(crate) fn to_query_string(token: &AccessToken, params: Option<&Params>) -> String {
    let mut pairs: BTreeMap<&str, String> = BTreeMap::new();
    pairs.insert("access_token", token.as_str().to_string());

    if let Some(params) = params {
        for (key, value) in params.iter() {
            pairs.insert(key.as_str(), value.render());
        }
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
