use crate::error::SortError;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::Range;

/// An optional comment line directly above a `name version` line. The name
/// has to open its line, so a line carrying a third token never matches.
const ENTRY_PATTERN: &str = r"(?m)^(#.*\n)?([A-Za-z0-9_.-]+) ([A-Za-z0-9_.-]+)$";

/// What to do with non-blank lines that are not part of any entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum UnmatchedPolicy {
    /// Remove them from the output without saying anything.
    #[default]
    Drop,
    /// Remove them from the output and log each one.
    Warn,
    /// Refuse to sort the file.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnmatchedLine {
    pub(crate) number: usize,
    pub(crate) text: String,
}

#[derive(Debug)]
pub(crate) struct Sorted {
    pub(crate) content: String,
    pub(crate) changed: bool,
    pub(crate) dropped: Vec<UnmatchedLine>,
}

pub(crate) struct DependencySorter {
    pattern: Regex,
    policy: UnmatchedPolicy,
}

impl DependencySorter {
    pub(crate) fn new(policy: UnmatchedPolicy) -> Result<Self, SortError> {
        Ok(Self {
            pattern: Regex::new(ENTRY_PATTERN)?,
            policy,
        })
    }

    pub(crate) fn policy(&self) -> UnmatchedPolicy {
        self.policy
    }

    /// Rebuilds `content` with its entries ordered by package name, one blank
    /// line between entries and a single trailing newline. A later entry for
    /// the same package replaces an earlier one.
    pub(crate) fn sort(&self, content: &[u8]) -> Result<Sorted, SortError> {
        let text = std::str::from_utf8(content)?;

        let mut registry = BTreeMap::new();
        let mut spans = Vec::new();
        for caps in self.pattern.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
                continue;
            };
            registry.insert(name.as_str(), whole.as_str());
            spans.push(whole.range());
        }

        let dropped = unmatched_lines(text, &spans);
        if self.policy == UnmatchedPolicy::Fail {
            if let Some(line) = dropped.first() {
                return Err(SortError::Unmatched {
                    number: line.number,
                    text: line.text.clone(),
                });
            }
        }
        Ok(build(content, &registry, dropped))
    }
}

fn build(original: &[u8], registry: &BTreeMap<&str, &str>, dropped: Vec<UnmatchedLine>) -> Sorted {
    let mut content = registry.values().copied().collect::<Vec<_>>().join("\n\n");
    content.push('\n');
    let changed = content.as_bytes() != original;
    Sorted {
        content,
        changed,
        dropped,
    }
}

/// Non-blank lines of `text` that no entry span fully covers. `spans` must be
/// ascending and non-overlapping, as `captures_iter` yields them.
fn unmatched_lines(text: &str, spans: &[Range<usize>]) -> Vec<UnmatchedLine> {
    let mut unmatched = Vec::new();
    let mut spans = spans.iter().peekable();
    let mut start = 0;
    for (index, raw) in text.split_inclusive('\n').enumerate() {
        let line = raw.trim_end_matches(['\n', '\r']);
        let end = start + line.len();
        while spans.next_if(|span| span.end < end).is_some() {}
        let covered = spans
            .peek()
            .is_some_and(|span| span.start <= start && end <= span.end);
        if !covered && !line.trim().is_empty() {
            unmatched.push(UnmatchedLine {
                number: index + 1,
                text: line.to_string(),
            });
        }
        start += raw.len();
    }
    unmatched
}
