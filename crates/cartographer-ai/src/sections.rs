//! Splits a summary into the panels shown next to the graph

use serde::Serialize;

/// Summary lines grouped by topic, each list in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummarySections {
    pub purpose: Vec<String>,
    pub functions: Vec<String>,
    pub dependencies: Vec<String>,
    pub architecture: Vec<String>,
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Purpose,
    Functions,
    Dependencies,
    Architecture,
    Metrics,
}

const KEYWORDS: &[(Section, &[&str])] = &[
    (Section::Purpose, &["purpose", "main goal", "primary"]),
    (Section::Functions, &["function", "method", "class"]),
    (Section::Dependencies, &["import", "dependency", "require"]),
    (Section::Architecture, &["architecture", "structure", "pattern"]),
    (Section::Metrics, &["complexity", "lines", "size"]),
];

impl SummarySections {
    /// Bucket each non-blank line by the first keyword group it mentions.
    ///
    /// Lines without a keyword stay in the current section, which starts at
    /// purpose.
    pub fn parse(summary: &str) -> Self {
        let mut sections = SummarySections::default();
        let mut current = Section::Purpose;

        for line in summary.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let lower = line.to_lowercase();
            if let Some((section, _)) = KEYWORDS
                .iter()
                .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            {
                current = *section;
            }
            sections.bucket(current).push(line.to_string());
        }

        sections
    }

    fn bucket(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Purpose => &mut self.purpose,
            Section::Functions => &mut self.functions,
            Section::Dependencies => &mut self.dependencies,
            Section::Architecture => &mut self.architecture,
            Section::Metrics => &mut self.metrics,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.purpose.is_empty()
            && self.functions.is_empty()
            && self.dependencies.is_empty()
            && self.architecture.is_empty()
            && self.metrics.is_empty()
    }
}
