use std::cmp::Ordering;
use std::fmt;

/// Answers how the platform version orders against a threshold version.
pub trait VersionResolver {
    fn compare_to(&self, threshold: &str) -> Ordering;
}

/// A platform version string, compared the way package managers compare
/// release numbers (`5.10` sorts after `5.9`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVersion(String);

impl PlatformVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl VersionResolver for PlatformVersion {
    fn compare_to(&self, threshold: &str) -> Ordering {
        versioncmp(&self.0, threshold)
    }
}

/// Compare two version strings segment by segment.
///
/// Segments are digit runs, non-separator text runs, `.` and `-`. A `-`
/// sorts before anything else, then `.`. Digit runs compare numerically
/// unless either carries a leading zero. The first differing pair of text
/// runs decides the result, compared without regard to case. When one side
/// runs out of segments the whole strings are compared as text.
pub fn versioncmp(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);

    for (x, y) in left.iter().zip(right.iter()) {
        if x == y {
            continue;
        }
        let ord = match (*x, *y) {
            ("-", _) => Ordering::Less,
            (_, "-") => Ordering::Greater,
            (".", _) => Ordering::Less,
            (_, ".") => Ordering::Greater,
            (x, y) if is_numeric(x) && is_numeric(y) => {
                if x.starts_with('0') || y.starts_with('0') {
                    x.to_ascii_uppercase().cmp(&y.to_ascii_uppercase())
                } else {
                    compare_digits(x, y)
                }
            }
            // Text runs equal ignoring case settle the comparison.
            (x, y) => return x.to_ascii_uppercase().cmp(&y.to_ascii_uppercase()),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a.cmp(b)
}

fn segments(version: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut chars = version.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch == '.' || ch == '-' {
            out.push(&version[idx..idx + 1]);
            continue;
        }
        let digit = ch.is_ascii_digit();
        let end = loop {
            match chars.peek() {
                Some(&(_, next))
                    if next != '.' && next != '-' && next.is_ascii_digit() == digit =>
                {
                    chars.next();
                }
                Some(&(next_idx, _)) => break next_idx,
                None => break version.len(),
            }
        };
        out.push(&version[idx..end]);
    }

    out
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

// Digit runs without leading zeros: longer is larger, equal length compares textually.
fn compare_digits(x: &str, y: &str) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{segments, versioncmp, PlatformVersion, VersionResolver};

    #[test]
    fn splits_into_digit_text_and_separator_runs() {
        assert_eq!(segments("5.6"), vec!["5", ".", "6"]);
        assert_eq!(segments("6.4-beta2"), vec!["6", ".", "4", "-", "beta", "2"]);
        assert_eq!(segments("current"), vec!["current"]);
    }

    #[test]
    fn numeric_segments_compare_numerically() {
        assert_eq!(versioncmp("5.10", "5.9"), Ordering::Greater);
        assert_eq!(versioncmp("5.6", "5.6"), Ordering::Equal);
        assert_eq!(versioncmp("5.5", "5.6"), Ordering::Less);
        assert_eq!(versioncmp("6.0", "5.6"), Ordering::Greater);
        assert_eq!(versioncmp("10.1", "9.9"), Ordering::Greater);
    }

    #[test]
    fn longer_version_sorts_after_its_prefix() {
        assert_eq!(versioncmp("5.6.1", "5.6"), Ordering::Greater);
        assert_eq!(versioncmp("5.6", "5.6.1"), Ordering::Less);
    }

    #[test]
    fn dash_sorts_before_dot() {
        assert_eq!(versioncmp("5.6-beta", "5.6.1"), Ordering::Less);
    }

    #[test]
    fn leading_zero_falls_back_to_text_order() {
        assert_eq!(versioncmp("5.06", "5.6"), Ordering::Less);
    }

    #[test]
    fn text_equal_ignoring_case_ends_the_comparison() {
        assert_eq!(versioncmp("6.4-beta.1", "6.4-BETA.2"), Ordering::Equal);
        assert_eq!(versioncmp("a", "A"), Ordering::Equal);
        assert_eq!(versioncmp("6.4-alpha", "6.4-BETA"), Ordering::Less);
    }

    #[test]
    fn platform_version_resolves_against_threshold() {
        let old = PlatformVersion::new("5.5\n");
        assert_eq!(old.as_str(), "5.5");
        assert_eq!(old.compare_to("5.6"), Ordering::Less);
        assert_eq!(PlatformVersion::new("7.4").compare_to("5.6"), Ordering::Greater);
    }
}
