//! System information reported by `GI`

use std::fmt;

/// System information
///
/// The camera reports one `key: value` pair per line. Keys vary between
/// firmware versions, so entries are kept in order as reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    entries: Vec<(String, String)>,
}

impl SystemInfo {
    /// Build from reply lines
    ///
    /// Lines are split at the first `:`; lines without one are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use insightrs_types::SystemInfo;
    ///
    /// let info = SystemInfo::from_lines(["Model: IS7802", "Firmware: 5.4.0"]);
    /// assert_eq!(info.get("model"), Some("IS7802"));
    /// assert_eq!(info.len(), 2);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .filter_map(|line| {
                let (key, value) = line.as_ref().split_once(':')?;
                let key = key.trim();
                (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
            })
            .collect();

        Self { entries }
    }

    /// Value for `key`, case-insensitive
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
