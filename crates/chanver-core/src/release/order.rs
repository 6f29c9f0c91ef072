//! Total order over release strings.
//!
//! [`ReleaseOrder::NewestFirst`]: one leading `v` is ignored and the rest is
//! read as a semantic version. Higher versions come first; a plain release
//! comes before its own pre-releases (`v1.1.1` before `v1.1.1-alpha.10`), and
//! pre-releases follow semver rules (`alpha.10` before `alpha.9`). Strings that
//! are not versions come after every version, in descending lexical order.

use std::cmp::Ordering;

use semver::Version;

/// Named ordering policy for `orderedReleases`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReleaseOrder {
    #[default]
    NewestFirst,
}

impl ReleaseOrder {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            ReleaseOrder::NewestFirst => match (parse_release(a), parse_release(b)) {
                (Some(va), Some(vb)) => vb.cmp(&va).then_with(|| b.cmp(a)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => b.cmp(a),
            },
        }
    }

    /// Sort in place and drop duplicate strings.
    pub fn sort(self, releases: &mut Vec<String>) {
        releases.sort_by(|a, b| self.compare(a, b));
        releases.dedup();
    }
}

/// Parse `v1.2.3[-pre]` or `1.2.3[-pre]`.
pub fn parse_release(release: &str) -> Option<Version> {
    let trimmed = release.strip_prefix('v').unwrap_or(release);
    Version::parse(trimmed).ok()
}
