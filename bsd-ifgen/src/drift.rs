use serde::Serialize;

/// One line of a comparison between an installed file and its generated
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DriftLine {
    Unchanged { line: String },
    /// Present in the generated content only.
    Added { line: String },
    /// Present in the installed file only.
    Removed { line: String },
}

/// Line diff of `current` (installed) against `desired` (generated), based
/// on the longest common subsequence of lines.
pub fn diff_lines(current: &str, desired: &str) -> Vec<DriftLine> {
    let old: Vec<&str> = current.lines().collect();
    let new: Vec<&str> = desired.lines().collect();

    // lcs[i][j]: length of the LCS of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; new.len() + 1]; old.len() + 1];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut out = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            out.push(DriftLine::Unchanged {
                line: old[i].to_string(),
            });
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            out.push(DriftLine::Removed {
                line: old[i].to_string(),
            });
            i += 1;
        } else {
            out.push(DriftLine::Added {
                line: new[j].to_string(),
            });
            j += 1;
        }
    }
    out.extend(old[i..].iter().map(|line| DriftLine::Removed {
        line: line.to_string(),
    }));
    out.extend(new[j..].iter().map(|line| DriftLine::Added {
        line: line.to_string(),
    }));
    out
}

pub fn has_drift(entries: &[DriftLine]) -> bool {
    entries
        .iter()
        .any(|entry| !matches!(entry, DriftLine::Unchanged { .. }))
}

/// Format drift entries as plain text (`+`, `-` and two-space prefixes).
pub fn format_drift_text(entries: &[DriftLine]) -> String {
    entries
        .iter()
        .map(|entry| match entry {
            DriftLine::Unchanged { line } => format!("  {line}"),
            DriftLine::Added { line } => format!("+ {line}"),
            DriftLine::Removed { line } => format!("- {line}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_drift_summary(entries: &[DriftLine]) -> String {
    let mut unchanged = 0;
    let mut added = 0;
    let mut removed = 0;
    for entry in entries {
        match entry {
            DriftLine::Unchanged { .. } => unchanged += 1,
            DriftLine::Added { .. } => added += 1,
            DriftLine::Removed { .. } => removed += 1,
        }
    }
    format!("unchanged={unchanged} added={added} removed={removed}")
}
