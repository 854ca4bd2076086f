//! Release ordering for message fragments
//!
//! Fragment names are version strings (`1.2.3`, `1.3.0-pre2`) plus the
//! special `install` message. A `SortKey` turns a name into something with a
//! total order: `install` first, then versions by numeric components, with a
//! pre-release sorting before the release it precedes.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Name of the fragment shown on first install
pub const INSTALL_FRAGMENT: &str = "install";

/// Marker separating a version from its pre-release suffix
const PRE_RELEASE_PATTERN: &str = r"^(.*)-pre(.*)";

fn pre_release_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PRE_RELEASE_PATTERN).expect("pre-release pattern is valid"))
}

/// Stability of a versioned fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseKind {
    /// `<version>-pre<suffix>`
    PreRelease(String),
    /// Plain `<version>`
    Release,
}

impl ReleaseKind {
    /// Numeric marker placed after the version components (pre = 0, release = 1)
    pub fn marker(&self) -> u64 {
        match self {
            ReleaseKind::PreRelease(_) => 0,
            ReleaseKind::Release => 1,
        }
    }

    pub fn is_pre_release(&self) -> bool {
        matches!(self, ReleaseKind::PreRelease(_))
    }
}

/// Ordering key derived from a fragment name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// The install message, always first
    Install,
    /// A versioned fragment
    Version {
        components: Vec<u64>,
        kind: ReleaseKind,
    },
}

impl SortKey {
    /// Build the key for a fragment name (file stem)
    pub fn from_name(name: &str) -> Self {
        if name == INSTALL_FRAGMENT {
            return SortKey::Install;
        }

        match pre_release_regex().captures(name) {
            Some(caps) => SortKey::Version {
                components: parse_components(&caps[1]),
                kind: ReleaseKind::PreRelease(caps[2].to_string()),
            },
            None => SortKey::Version {
                components: parse_components(name),
                kind: ReleaseKind::Release,
            },
        }
    }

    pub fn is_install(&self) -> bool {
        matches!(self, SortKey::Install)
    }

    /// Version components followed by the stability marker
    fn numeric_tuple(&self) -> impl Iterator<Item = u64> + '_ {
        let (components, marker): (&[u64], Option<u64>) = match self {
            SortKey::Install => (&[], None),
            SortKey::Version { components, kind } => (components.as_slice(), Some(kind.marker())),
        };
        components.iter().copied().chain(marker)
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Install, SortKey::Install) => Ordering::Equal,
            (SortKey::Install, _) => Ordering::Less,
            (_, SortKey::Install) => Ordering::Greater,
            (
                SortKey::Version { kind: left, .. },
                SortKey::Version { kind: right, .. },
            ) => self
                .numeric_tuple()
                .cmp(other.numeric_tuple())
                .then_with(|| match (left, right) {
                    (ReleaseKind::PreRelease(a), ReleaseKind::PreRelease(b)) => a.cmp(b),
                    _ => Ordering::Equal,
                }),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a dotted version into integers. Each part contributes its leading
/// digits, or 0 when it has none. Values past `u64::MAX` saturate.
fn parse_components(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| {
            let digits: String = part
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if digits.is_empty() {
                0
            } else {
                digits.parse().unwrap_or(u64::MAX)
            }
        })
        .collect()
}
