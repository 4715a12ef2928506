//! Props shape extraction from component source text.
//!
//! Extraction is pattern based: the first `interface XxxProps { ... }` block wins, falling
//! back to the first `type XxxProps = { ... }` alias. Block bodies end at the first closing
//! brace, so nested object types are cut short. Fields are `name?: type;` declarations.

use std::{fs, io::ErrorKind, path::Path, sync::LazyLock};

use regex::Regex;

static INTERFACE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"interface\s+(\w+Props)\s*\{([^}]+)\}").unwrap());

static TYPE_ALIAS_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"type\s+(\w+Props)\s*=\s*\{([^}]+)\}").unwrap());

static FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)(\??)\s*:\s*([^;]+);").unwrap());

static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").unwrap());

/// A single prop as declared in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropInfo {
    pub optional: bool,
    /// Type text with comments removed and whitespace collapsed.
    pub type_text: String,
}

/// Props extracted from one source file, in declaration order.
///
/// Redeclaring a name replaces the earlier value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedProps {
    props: Vec<(String, PropInfo)>,
}

impl ExtractedProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, info: PropInfo) {
        let name = name.into();
        match self.props.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = info,
            None => self.props.push((name, info)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropInfo> {
        self.props
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, info)| info)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropInfo)> {
        self.props.iter().map(|(name, info)| (name.as_str(), info))
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// The props block located in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropsBlock<'a> {
    /// Name of the props type, e.g. `ButtonProps`.
    pub type_name: &'a str,
    pub body: &'a str,
}

/// Outcome of extracting props from a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropsExtraction {
    /// The file does not exist.
    NotFound,
    /// The file exists but could not be read as UTF-8 text.
    Unreadable(String),
    /// The file was read but contains no props block.
    NoPropsBlock,
    /// A props block was found. It may legitimately have zero fields.
    Parsed(ExtractedProps),
}

/// Locate the first props block, preferring interfaces over type aliases.
pub fn find_props_block(source: &str) -> Option<PropsBlock<'_>> {
    let captures = INTERFACE_BLOCK_REGEX
        .captures(source)
        .or_else(|| TYPE_ALIAS_BLOCK_REGEX.captures(source))?;

    Some(PropsBlock {
        type_name: captures.get(1)?.as_str(),
        body: captures.get(2)?.as_str(),
    })
}

/// Parse the field declarations of a props block body.
pub fn parse_props_body(body: &str) -> ExtractedProps {
    let mut props = ExtractedProps::new();

    for captures in FIELD_REGEX.captures_iter(body) {
        let name = &captures[1];
        let optional = &captures[2] == "?";
        let type_text = normalize_type_text(&captures[3]);
        props.insert(
            name,
            PropInfo {
                optional,
                type_text,
            },
        );
    }

    props
}

/// Extract props from source text.
///
/// Returns an empty mapping when no props block exists; use [`find_props_block`] or
/// [`extract_file`] when that case must be told apart from an empty block.
pub fn extract_props(source: &str) -> ExtractedProps {
    find_props_block(source)
        .map(|block| parse_props_body(block.body))
        .unwrap_or_default()
}

/// Read a component file and extract its props.
pub fn extract_file(path: &Path) -> PropsExtraction {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == ErrorKind::NotFound => return PropsExtraction::NotFound,
        Err(err) => return PropsExtraction::Unreadable(err.to_string()),
    };

    match find_props_block(&source) {
        Some(block) => PropsExtraction::Parsed(parse_props_body(block.body)),
        None => PropsExtraction::NoPropsBlock,
    }
}

fn normalize_type_text(raw: &str) -> String {
    let without_comments = LINE_COMMENT_REGEX.replace_all(raw.trim(), "");
    without_comments.split_whitespace().collect::<Vec<_>>().join(" ")
}
