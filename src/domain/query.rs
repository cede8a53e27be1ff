// Canonical query-string encoding of a filter state
use super::filter::FilterState;
use std::fmt;

/// Transport-ready key/value pairs derived from a [`FilterState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[cfg(test)]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, urlencoding::encode(value))?;
        }
        Ok(())
    }
}

/// Encode a filter state. Absent or blank fields are omitted, never sent empty.
pub fn encode(state: &FilterState) -> QueryString {
    let mut pairs = Vec::with_capacity(4);

    if let Some(start) = state.start_date {
        pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
    }
    if let Some(end) = state.end_date {
        pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
    }
    if let Some(city) = non_blank(&state.city) {
        pairs.push(("city", city.to_string()));
    }
    if let Some(channel) = non_blank(&state.channel) {
        pairs.push(("channel", channel.to_string()));
    }

    QueryString { pairs }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
