//! Core data structures for the file dependency graph

use serde::{Deserialize, Serialize};

/// Identifier of a file node inside a [`crate::FileGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct NodeId(pub u64);

/// Identifier of a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct EdgeId(pub u64);

/// Display classification of a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FileKind {
    JavaScript,
    React,
    TypeScript,
    #[serde(rename = "React TypeScript")]
    ReactTypeScript,
    Python,
    Java,
    #[serde(rename = "C++")]
    Cpp,
    C,
    Header,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "PHP")]
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    Unknown,
}

impl FileKind {
    /// Classify a lower-cased extension as returned by [`file_extension`].
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "js" => FileKind::JavaScript,
            "jsx" => FileKind::React,
            "ts" => FileKind::TypeScript,
            "tsx" => FileKind::ReactTypeScript,
            "py" => FileKind::Python,
            "java" => FileKind::Java,
            "cpp" => FileKind::Cpp,
            "c" => FileKind::C,
            "h" => FileKind::Header,
            "cs" => FileKind::CSharp,
            "php" => FileKind::Php,
            "rb" => FileKind::Ruby,
            "go" => FileKind::Go,
            "rs" => FileKind::Rust,
            "swift" => FileKind::Swift,
            "kt" => FileKind::Kotlin,
            _ => FileKind::Unknown,
        }
    }

    /// Classify a file by name.
    pub fn from_file_name(name: &str) -> Self {
        Self::from_extension(&file_extension(name))
    }

    /// Human-readable type label, as shown on nodes and in the dashboard.
    pub fn display_name(&self) -> &'static str {
        match self {
            FileKind::JavaScript => "JavaScript",
            FileKind::React => "React",
            FileKind::TypeScript => "TypeScript",
            FileKind::ReactTypeScript => "React TypeScript",
            FileKind::Python => "Python",
            FileKind::Java => "Java",
            FileKind::Cpp => "C++",
            FileKind::C => "C",
            FileKind::Header => "Header",
            FileKind::CSharp => "C#",
            FileKind::Php => "PHP",
            FileKind::Ruby => "Ruby",
            FileKind::Go => "Go",
            FileKind::Rust => "Rust",
            FileKind::Swift => "Swift",
            FileKind::Kotlin => "Kotlin",
            FileKind::Unknown => "Unknown",
        }
    }

    /// Border color used by the graph renderer.
    pub fn border_color(&self) -> &'static str {
        match self {
            FileKind::JavaScript => "#f7df1e",
            FileKind::React | FileKind::ReactTypeScript => "#61dafb",
            FileKind::TypeScript => "#3178c6",
            FileKind::Python => "#3776ab",
            FileKind::Java => "#ed8b00",
            FileKind::Cpp | FileKind::C => "#00599c",
            FileKind::CSharp => "#239120",
            FileKind::Php => "#777bb4",
            FileKind::Ruby => "#cc342d",
            FileKind::Go => "#00add8",
            FileKind::Rust => "#dea584",
            FileKind::Swift => "#fa7343",
            FileKind::Kotlin => "#7f52ff",
            FileKind::Header | FileKind::Unknown => "#6b7280",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lower-cased text after the last `.` of a file name.
///
/// A name without a dot is returned whole, so `Makefile` yields `makefile`.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Long-form description of an extension, used in fallback summaries.
pub fn describe_extension(ext: &str) -> String {
    let known = match ext {
        "js" => "JavaScript source file",
        "jsx" => "React component file",
        "ts" => "TypeScript source file",
        "tsx" => "React TypeScript component",
        "py" => "Python script",
        "java" => "Java class file",
        "cpp" => "C++ source file",
        "c" => "C source file",
        "h" => "C/C++ header file",
        "cs" => "C# source file",
        "php" => "PHP script",
        "rb" => "Ruby script",
        "go" => "Go source file",
        "rs" => "Rust source file",
        "swift" => "Swift source file",
        "kt" => "Kotlin source file",
        other => return format!("{} file", other.to_uppercase()),
    };
    known.to_string()
}

/// Everything known about one analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileRecord {
    pub name: String,
    /// Path relative to the dropped folder, or the bare name for loose files.
    pub path: String,
    pub content: String,
    pub kind: FileKind,
    pub size: u64,
    pub lines: u32,
    pub imports: Vec<String>,
    pub exports: Vec<String>,
    /// Keyword-count heuristic, always within `0..=MAX_COMPLEXITY`.
    pub complexity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Upper bound of [`FileRecord::complexity`].
pub const MAX_COMPLEXITY: u8 = 10;

/// Number of `\n`-separated segments in `content`; an empty file has one line.
pub fn line_count(content: &str) -> u32 {
    content.split('\n').count() as u32
}

/// Canvas position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A file placed in the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileNode {
    pub id: NodeId,
    pub file: FileRecord,
    pub position: Position,
}

/// Which resolution step linked an import to its target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The import string is exactly a file name.
    Exact,
    /// The import string plus a known extension is a file name.
    Extension,
    /// One of the two strings contains the other. Can produce false edges.
    Substring,
}

/// A directed "source imports target" link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DependencyEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    /// The import string that produced this edge.
    pub import: String,
    pub strategy: MatchStrategy,
}
