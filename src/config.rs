//! Syntax rule configuration
//!
//! Loads named highlighting rules from a JSON file (or TOML, selected by
//! a `.toml` extension). Each rule maps a name to a regex pattern and a
//! palette color; rules keep their declaration order.
//!
//! Example:
//! ```text
//! {
//!     "tag": { "pattern": "</?[a-zA-Z][a-zA-Z0-9]*>", "color": "cyan" },
//!     "comment": { "pattern": "<!--.*?-->", "color": "green" }
//! }
//! ```
//!
//! The same rules in TOML:
//! ```text
//! [tag]
//! pattern = "</?[a-zA-Z][a-zA-Z0-9]*>"
//! color = "cyan"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::syntax::{Color, RuleSet, SyntaxRule};

/// On-disk format of a rule file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// A rule as written in the configuration, before validation
#[derive(Debug, Deserialize)]
struct RawRule {
    pattern: String,
    color: String,
}

/// Load and compile the rule set at `path`
pub fn load(path: &Path) -> Result<RuleSet> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HighlightError::ConfigNotFound(path.display().to_string()),
        ErrorKind::InvalidData => HighlightError::ConfigParse(format!("{}: {}", path.display(), e)),
        _ => HighlightError::Io(e),
    })?;

    let rules = parse(&contents, ConfigFormat::from_path(path))?;
    log::debug!("Loaded {} syntax rules from {}", rules.len(), path.display());
    for rule in rules.iter() {
        log::debug!("Rule '{}': /{}/ -> {}", rule.name, rule.pattern.as_str(), rule.color);
    }
    Ok(rules)
}

/// Parse configuration text into a compiled rule set
pub fn parse(contents: &str, format: ConfigFormat) -> Result<RuleSet> {
    let entries = match format {
        ConfigFormat::Json => parse_json(contents)?,
        ConfigFormat::Toml => parse_toml(contents)?,
    };

    entries
        .into_iter()
        .map(|(name, raw)| compile(&name, raw))
        .collect()
}

fn parse_json(contents: &str) -> Result<Vec<(String, RawRule)>> {
    let table: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(contents).map_err(|e| HighlightError::ConfigParse(e.to_string()))?;

    table
        .into_iter()
        .map(|(name, value)| match RawRule::deserialize(value) {
            Ok(raw) => Ok((name, raw)),
            Err(e) => Err(HighlightError::ConfigParse(format!("rule '{}': {}", name, e))),
        })
        .collect()
}

fn parse_toml(contents: &str) -> Result<Vec<(String, RawRule)>> {
    let table: toml::Table = contents
        .parse()
        .map_err(|e: toml::de::Error| HighlightError::ConfigParse(e.to_string()))?;

    table
        .into_iter()
        .map(|(name, value)| match value.try_into::<RawRule>() {
            Ok(raw) => Ok((name, raw)),
            Err(e) => Err(HighlightError::ConfigParse(format!("rule '{}': {}", name, e))),
        })
        .collect()
}

/// Validate the color and compile the pattern of one rule
fn compile(name: &str, raw: RawRule) -> Result<SyntaxRule> {
    let color = Color::from_name(&raw.color).ok_or_else(|| HighlightError::UnknownColor {
        rule: name.to_string(),
        color: raw.color.clone(),
        expected: palette_names(),
    })?;
    SyntaxRule::new(name, &raw.pattern, color)
}

fn palette_names() -> String {
    Color::ALL
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn names(rules: &RuleSet) -> Vec<&str> {
        rules.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_parse_json() {
        let contents = r#"{
            "tag": { "pattern": "</?[a-zA-Z][a-zA-Z0-9]*>", "color": "cyan" },
            "string": { "pattern": "\"[^\"]*\"", "color": "green" }
        }"#;

        let rules = parse(contents, ConfigFormat::Json).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(names(&rules), vec!["tag", "string"]);

        let tag = rules.iter().next().unwrap();
        assert_eq!(tag.color, Color::Cyan);
        assert!(tag.pattern.is_match("<div>"));
    }

    #[test]
    fn test_parse_json_keeps_declaration_order() {
        let contents = r#"{
            "zeta": { "pattern": "z", "color": "red" },
            "alpha": { "pattern": "a", "color": "blue" },
            "mid": { "pattern": "m", "color": "reset" }
        }"#;

        let rules = parse(contents, ConfigFormat::Json).unwrap();
        assert_eq!(names(&rules), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_empty_object() {
        let rules = parse("{}", ConfigFormat::Json).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_unknown_color() {
        let contents = r#"{ "tag": { "pattern": "<b>", "color": "orange" } }"#;
        let err = parse(contents, ConfigFormat::Json).unwrap_err();
        match err {
            HighlightError::UnknownColor { rule, color, expected } => {
                assert_eq!(rule, "tag");
                assert_eq!(color, "orange");
                assert!(expected.contains("magenta"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = parse(r#"{ "tag": "#, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, HighlightError::ConfigParse(_)));

        let err = parse(r#"["not", "a", "map"]"#, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, HighlightError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_field() {
        let contents = r#"{ "tag": { "pattern": "<b>" } }"#;
        let err = parse(contents, ConfigFormat::Json).unwrap_err();
        match err {
            HighlightError::ConfigParse(msg) => assert!(msg.contains("tag")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let contents = r#"{ "broken": { "pattern": "[a-", "color": "red" } }"#;
        let err = parse(contents, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_toml() {
        let contents = r#"
[tag]
pattern = '</?[a-z]+>'
color = "cyan"

[entity]
pattern = '&[a-z]+;'
color = "magenta"
"#;

        let rules = parse(contents, ConfigFormat::Toml).unwrap();
        assert_eq!(names(&rules), vec!["tag", "entity"]);
        assert_eq!(rules.iter().nth(1).map(|r| r.color), Some(Color::Magenta));
    }

    #[test]
    fn test_parse_toml_errors() {
        let err = parse("[tag\npattern = 1", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, HighlightError::ConfigParse(_)));

        let err = parse("[tag]\npattern = 'x'\ncolor = 'pink'\n", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, HighlightError::UnknownColor { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("syntax.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("syntax.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("syntax")), ConfigFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("/nonexistent/popout/syntax.json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, HighlightError::ConfigNotFound(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("popout-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "bold": { "pattern": "</?b>", "color": "red" } }"#).unwrap();

        let result = load(&path);
        let _ = fs::remove_file(&path);

        let rules = result.unwrap();
        assert_eq!(names(&rules), vec!["bold"]);
    }

    #[test]
    fn test_load_invalid_utf8() {
        let path = std::env::temp_dir().join(format!("popout-config-{}-bad.json", std::process::id()));
        fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        let result = load(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(HighlightError::ConfigParse(_))));
    }
}
