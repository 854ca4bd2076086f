use regex::Regex;
use std::sync::OnceLock;

/// Any name containing this pattern is published as a pre-release
const PRE_RELEASE_FLAG_PATTERN: &str = "pre";

fn pre_release_flag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(PRE_RELEASE_FLAG_PATTERN).expect("pre-release flag pattern is valid")
    })
}

/// Version information derived from the last fragment in release order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMarker {
    /// Contents of the `VERSION` file
    pub version: String,

    /// Contents of the `PRE_RELEASE` file
    pub pre_release: bool,
}

impl VersionMarker {
    pub fn from_name(name: &str) -> Self {
        Self {
            version: name.to_string(),
            pre_release: pre_release_flag_regex().is_match(name),
        }
    }

    /// Text written to the `PRE_RELEASE` file
    pub fn pre_release_text(&self) -> &'static str {
        if self.pre_release {
            "true"
        } else {
            "false"
        }
    }
}
