//! Coding-system classification and search filtering.

use serde::Serialize;

/// The coding system a concept belongs to, derived from its system URI.
///
/// Classification is by URI substring: any URI containing `namaste` is
/// NAMASTE, then `tm2` (ICD-11 Traditional Medicine Module 2), then `mms`
/// (ICD-11 Mortality and Morbidity Statistics). Everything else is
/// [`SystemTag::Unknown`]. Every URI lands in exactly one tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemTag {
    /// NAMASTE traditional-medicine terminology.
    Namaste,
    /// ICD-11 MMS (biomedical) linearization.
    Icd11Mms,
    /// ICD-11 Traditional Medicine Module 2.
    Icd11Tm2,
    /// Any other coding system.
    Unknown,
}

impl SystemTag {
    /// Classify a system URI into its tag.
    pub fn classify(system_uri: &str) -> Self {
        let uri = system_uri.to_ascii_lowercase();
        if uri.contains("namaste") {
            SystemTag::Namaste
        } else if uri.contains("tm2") {
            SystemTag::Icd11Tm2
        } else if uri.contains("mms") {
            SystemTag::Icd11Mms
        } else {
            SystemTag::Unknown
        }
    }

    /// Stable label used in filters and output.
    pub fn as_str(self) -> &'static str {
        match self {
            SystemTag::Namaste => "namaste",
            SystemTag::Icd11Mms => "icd11-mms",
            SystemTag::Icd11Tm2 => "icd11-tm2",
            SystemTag::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SystemTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restriction of a search to particular coding systems.
///
/// An empty selection means no restriction, as does the `all` sentinel
/// label. A non-empty selection admits only concepts whose [`SystemTag`]
/// is listed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SystemFilter {
    /// Admit every concept.
    #[default]
    All,
    /// Admit only concepts tagged with one of the listed systems.
    Only(Vec<SystemTag>),
}

impl SystemFilter {
    /// Filter down to the given tags. An empty list means no filtering.
    pub fn only(tags: impl IntoIterator<Item = SystemTag>) -> Self {
        let tags: Vec<SystemTag> = tags.into_iter().collect();
        if tags.is_empty() {
            SystemFilter::All
        } else {
            SystemFilter::Only(tags)
        }
    }

    /// Build a filter from user-facing labels.
    ///
    /// Recognised labels: `all` (sentinel, disables filtering), `namaste`,
    /// `mms`/`icd11-mms`, `tm2`/`icd11-tm2`, `icd11`/`icd` (both ICD-11
    /// linearizations), `unknown`. Unrecognised labels select nothing, so a
    /// selection made up entirely of them admits no concepts.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Vec::new();
        let mut saw_label = false;
        for label in labels {
            saw_label = true;
            match label.as_ref().trim().to_ascii_lowercase().as_str() {
                "all" => return SystemFilter::All,
                "namaste" => tags.push(SystemTag::Namaste),
                "mms" | "icd11-mms" => tags.push(SystemTag::Icd11Mms),
                "tm2" | "icd11-tm2" => tags.push(SystemTag::Icd11Tm2),
                "icd11" | "icd" => {
                    tags.push(SystemTag::Icd11Mms);
                    tags.push(SystemTag::Icd11Tm2);
                }
                "unknown" => tags.push(SystemTag::Unknown),
                _ => {}
            }
        }
        if saw_label {
            SystemFilter::Only(tags)
        } else {
            SystemFilter::All
        }
    }

    /// Whether a concept with the given tag passes this filter.
    pub fn admits(&self, tag: SystemTag) -> bool {
        match self {
            SystemFilter::All => true,
            SystemFilter::Only(tags) => tags.contains(&tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_system_uris() {
        assert_eq!(
            SystemTag::classify("https://terminology.ayush.gov.in/namaste"),
            SystemTag::Namaste
        );
        assert_eq!(
            SystemTag::classify("http://id.who.int/icd/release/11/2022-02/mms"),
            SystemTag::Icd11Mms
        );
        assert_eq!(
            SystemTag::classify("http://id.who.int/icd/release/11/2022-02/tm2"),
            SystemTag::Icd11Tm2
        );
        assert_eq!(
            SystemTag::classify("http://snomed.info/sct"),
            SystemTag::Unknown
        );
    }

    #[test]
    fn every_uri_lands_in_exactly_one_tag() {
        // tm2 takes precedence over mms when a URI mentions both
        assert_eq!(
            SystemTag::classify("http://example.org/tm2-to-mms-map"),
            SystemTag::Icd11Tm2
        );
    }

    #[test]
    fn empty_selection_means_all() {
        let filter = SystemFilter::from_labels(Vec::<&str>::new());
        assert_eq!(filter, SystemFilter::All);
        assert!(filter.admits(SystemTag::Unknown));
        assert_eq!(SystemFilter::only([]), SystemFilter::All);
    }

    #[test]
    fn all_sentinel_disables_filtering() {
        let filter = SystemFilter::from_labels(["namaste", "all"]);
        assert_eq!(filter, SystemFilter::All);
    }

    #[test]
    fn icd11_label_covers_both_linearizations() {
        let filter = SystemFilter::from_labels(["icd11"]);
        assert!(filter.admits(SystemTag::Icd11Mms));
        assert!(filter.admits(SystemTag::Icd11Tm2));
        assert!(!filter.admits(SystemTag::Namaste));
    }

    #[test]
    fn unrecognised_labels_select_nothing() {
        let filter = SystemFilter::from_labels(["loinc"]);
        assert!(!filter.admits(SystemTag::Namaste));
        assert!(!filter.admits(SystemTag::Unknown));
    }
}
