//! Heuristic content classification
//!
//! Guesses which language a text sample looks like so the presentation layer
//! can pick a formatting style. Purely pattern-driven: ordered regex tests,
//! first match wins, no state. The same classifier feeds the reducer's
//! tool-output shaping and the CLI renderer, so both always agree.

use lazy_static::lazy_static;
use regex::Regex;

/// Presentation kind of a text sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    JavaScript,
    Sql,
    Bash,
    Json,
    Html,
    Css,
}

impl Language {
    /// Lowercase name, suitable as a code-fence tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Sql => "sql",
            Self::Bash => "bash",
            Self::Json => "json",
            Self::Html => "html",
            Self::Css => "css",
        }
    }

    /// Human-facing label for block headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::Sql => "SQL",
            Self::Bash => "Bash",
            Self::Json => "JSON",
            Self::Html => "HTML",
            Self::Css => "CSS",
        }
    }

    /// Parse a code-fence tag back into a language
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "python" | "py" => Some(Self::Python),
            "javascript" | "js" => Some(Self::JavaScript),
            "sql" => Some(Self::Sql),
            "bash" | "sh" | "shell" => Some(Self::Bash),
            "json" => Some(Self::Json),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            _ => None,
        }
    }
}

lazy_static! {
    static ref PYTHON_RE: Regex =
        Regex::new(r"^\s*(def |class |import |from .* import |print\(|if __name__|async def )")
            .unwrap();
    static ref JAVASCRIPT_RE: Regex =
        Regex::new(r"^\s*(function |const |let |var |=>|console\.|export |import \{)").unwrap();
    static ref SQL_RE: Regex =
        Regex::new(r"(?i)^\s*(SELECT|INSERT|UPDATE|DELETE|CREATE|DROP|ALTER)\s").unwrap();
    static ref SHELL_PROMPT_RE: Regex = Regex::new(r"^\s*[$#]").unwrap();
    static ref SHELL_COMMAND_RE: Regex =
        Regex::new(r"^\s*(cd |ls |cat |grep |curl |wget |npm |pip |git |echo |mkdir |rm )")
            .unwrap();
    static ref JSON_OBJECT_RE: Regex = Regex::new(r#"(?s)^\s*\{.*"\w+"\s*:"#).unwrap();
    static ref JSON_ARRAY_RE: Regex = Regex::new(r"(?s)^\s*\[.*\{").unwrap();
    static ref HTML_RE: Regex =
        Regex::new(r"(?i)^\s*<(!DOCTYPE|html|head|body|div|span|p|a |script|style)").unwrap();
    static ref CSS_RE: Regex = Regex::new(r"^\s*(body|div|\.[\w-]+|#[\w-]+)\s*\{").unwrap();
}

/// Classify a text sample, returning `None` when nothing matches.
///
/// Test order matters: a shell prompt line beginning with `#` would also look
/// like a CSS id selector, so the earlier test wins.
pub fn classify(sample: &str) -> Option<Language> {
    if sample.is_empty() {
        return None;
    }
    if PYTHON_RE.is_match(sample) {
        Some(Language::Python)
    } else if JAVASCRIPT_RE.is_match(sample) {
        Some(Language::JavaScript)
    } else if SQL_RE.is_match(sample) {
        Some(Language::Sql)
    } else if SHELL_PROMPT_RE.is_match(sample) || SHELL_COMMAND_RE.is_match(sample) {
        Some(Language::Bash)
    } else if JSON_OBJECT_RE.is_match(sample) || JSON_ARRAY_RE.is_match(sample) {
        Some(Language::Json)
    } else if HTML_RE.is_match(sample) {
        Some(Language::Html)
    } else if CSS_RE.is_match(sample) {
        Some(Language::Css)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_patterns() {
        assert_eq!(classify("def main():"), Some(Language::Python));
        assert_eq!(classify("  import os"), Some(Language::Python));
        assert_eq!(classify("from pathlib import Path"), Some(Language::Python));
        assert_eq!(classify("print('hi')"), Some(Language::Python));
    }

    #[test]
    fn test_javascript_patterns() {
        assert_eq!(classify("const x = 1;"), Some(Language::JavaScript));
        assert_eq!(classify("function foo() {}"), Some(Language::JavaScript));
        assert_eq!(classify("console.log('x')"), Some(Language::JavaScript));
    }

    #[test]
    fn test_sql_case_insensitive() {
        assert_eq!(classify("SELECT * FROM users"), Some(Language::Sql));
        assert_eq!(classify("select id from t"), Some(Language::Sql));
        assert_eq!(classify("  DROP TABLE users"), Some(Language::Sql));
    }

    #[test]
    fn test_shell_patterns() {
        assert_eq!(classify("$ ls -la"), Some(Language::Bash));
        assert_eq!(classify("curl http://example.com"), Some(Language::Bash));
        assert_eq!(classify("git status"), Some(Language::Bash));
    }

    #[test]
    fn test_json_patterns() {
        assert_eq!(classify(r#"{"key": "value"}"#), Some(Language::Json));
        assert_eq!(classify("[\n  {\"a\": 1}\n]"), Some(Language::Json));
    }

    #[test]
    fn test_html_and_css() {
        assert_eq!(classify("<!DOCTYPE html>"), Some(Language::Html));
        assert_eq!(classify("<div class=\"x\">"), Some(Language::Html));
        assert_eq!(classify(".card { color: red; }"), Some(Language::Css));
        assert_eq!(classify("body {\n  margin: 0;\n}"), Some(Language::Css));
    }

    #[test]
    fn test_plain_text_is_none() {
        assert_eq!(classify("just a sentence about things"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_ordering_is_deterministic() {
        // "import {" would match both python-ish and javascript patterns;
        // python is tested first and must win every time.
        let sample = "import {thing} from './mod';";
        for _ in 0..3 {
            assert_eq!(classify(sample), Some(Language::Python));
        }
    }
}
