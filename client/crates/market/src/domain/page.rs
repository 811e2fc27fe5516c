//! Paging
//!
//! Requests carry `pageNum`/`pageSize` (or `current`/`size` on the admin
//! endpoints). Responses are the backend's page object. Its counters arrive
//! as decimal strings after normalization, so they are read leniently.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{MarketError, MarketResult};

pub const DEFAULT_PAGE_NUM: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page selection plus free-form filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page_num: u32,
    pub page_size: u32,
    pub filters: BTreeMap<String, String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
            filters: BTreeMap::new(),
        }
    }
}

impl PageQuery {
    pub fn new(page_num: u32, page_size: u32) -> MarketResult<Self> {
        if page_num == 0 || page_size == 0 {
            return Err(MarketError::InvalidPage(format!(
                "page {page_num}, size {page_size}"
            )));
        }
        Ok(Self {
            page_num,
            page_size,
            filters: BTreeMap::new(),
        })
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Query pairs using `pageNum`/`pageSize`
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.pairs("pageNum", "pageSize")
    }

    /// Query pairs using `current`/`size`
    pub fn to_current_size_query(&self) -> Vec<(String, String)> {
        self.pairs("current", "size")
    }

    fn pairs(&self, num_key: &str, size_key: &str) -> Vec<(String, String)> {
        let mut pairs = vec![
            (num_key.to_string(), self.page_num.to_string()),
            (size_key.to_string(), self.page_size.to_string()),
        ];
        pairs.extend(
            self.filters
                .iter()
                .filter(|(key, _)| key.as_str() != num_key && key.as_str() != size_key)
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        pairs
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub size: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.current >= self.pages
    }
}

/// Accept a counter as a JSON number or a decimal string
fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("counter out of range: {n}"))),
        Value::String(s) => s
            .parse()
            .map_err(|_| D::Error::custom(format!("counter is not a number: {s:?}"))),
        other => Err(D::Error::custom(format!("unexpected counter: {other}"))),
    }
}
