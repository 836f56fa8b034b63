//! Verdict catalog
//!
//! Maps status codes reported by the API to the text sent to the student.
//! The catalog is an immutable value built once at startup and handed to
//! whoever needs it.

use std::collections::HashMap;

use super::homework::HomeworkStatus;

/// Result of looking a status code up in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// Known status with verdict text
    Found(&'a str),

    /// Known status whose verdict text is empty
    Blank,

    /// Status code not present in the catalog
    Unknown,
}

/// Immutable mapping from status code to verdict text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictCatalog {
    verdicts: HashMap<String, String>,
}

impl VerdictCatalog {
    /// Builds a catalog from arbitrary `(status, verdict)` pairs
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            verdicts: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Looks up the verdict for a status code
    pub fn lookup(&self, status: &str) -> Verdict<'_> {
        match self.verdicts.get(status) {
            Some(text) if text.is_empty() => Verdict::Blank,
            Some(text) => Verdict::Found(text),
            None => Verdict::Unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

impl Default for VerdictCatalog {
    fn default() -> Self {
        Self::from_entries(
            HomeworkStatus::ALL
                .into_iter()
                .map(|status| (status.as_str(), status.verdict())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_covers_known_statuses() {
        let catalog = VerdictCatalog::default();

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.lookup("approved"),
            Verdict::Found("Работа проверена: ревьюеру всё понравилось. Ура!")
        );
        assert_eq!(
            catalog.lookup("reviewing"),
            Verdict::Found("Работа взята на проверку ревьюером.")
        );
        assert_eq!(
            catalog.lookup("rejected"),
            Verdict::Found("Работа проверена: у ревьюера есть замечания.")
        );
    }

    #[test]
    fn test_unknown_status() {
        let catalog = VerdictCatalog::default();
        assert_eq!(catalog.lookup("on_hold"), Verdict::Unknown);
    }

    #[test]
    fn test_blank_verdict() {
        let catalog = VerdictCatalog::from_entries([("approved", "")]);
        assert_eq!(catalog.lookup("approved"), Verdict::Blank);
    }
}
