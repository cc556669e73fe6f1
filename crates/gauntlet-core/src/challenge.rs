//! Challenge catalog
//!
//! Challenges are predefined tasks a human picks from the console. The
//! catalog is a plain JSON array on disk (`challenges.json`); nothing here
//! talks to the network.

use crate::error::{GauntletError, GauntletResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Difficulty badge of a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Easy")]
    Easy,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "Hard")]
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// One predefined task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    /// The task description sent verbatim to the agent and the judge
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    /// Reference answer forwarded to the judge when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_answer: Option<String>,
}

/// Load the catalog from a JSON file
pub fn load_challenges(path: &Path) -> GauntletResult<Vec<Challenge>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        GauntletError::config(format!("cannot read challenges file {}: {e}", path.display()))
    })?;
    let challenges: Vec<Challenge> = serde_json::from_str(&raw).map_err(|e| {
        GauntletError::config(format!(
            "invalid challenges file {}: {e}",
            path.display()
        ))
    })?;
    if challenges.is_empty() {
        return Err(GauntletError::config(format!(
            "challenges file {} is empty",
            path.display()
        )));
    }
    Ok(challenges)
}

/// Look a challenge up by id
pub fn find_challenge<'a>(challenges: &'a [Challenge], id: &str) -> Option<&'a Challenge> {
    challenges.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"[
        {
            "id": "sqli-basic",
            "title": "Basic SQL injection",
            "description": "Find and exploit the login form",
            "difficulty": "Easy",
            "category": "web",
            "model_answer": "' OR '1'='1"
        },
        {
            "id": "port-scan",
            "title": "Service discovery",
            "description": "Enumerate open ports",
            "difficulty": "medium",
            "category": "recon"
        }
    ]"#;

    #[test]
    fn test_load_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let challenges = load_challenges(file.path()).unwrap();
        assert_eq!(challenges.len(), 2);
        assert_eq!(challenges[0].difficulty, Difficulty::Easy);
        assert_eq!(challenges[1].difficulty, Difficulty::Medium);
        assert_eq!(challenges[1].model_answer, None);
    }

    #[test]
    fn test_find_by_id() {
        let challenges: Vec<Challenge> = serde_json::from_str(CATALOG).unwrap();
        assert!(find_challenge(&challenges, "port-scan").is_some());
        assert!(find_challenge(&challenges, "nope").is_none());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_challenges(Path::new("/nonexistent/challenges.json")).unwrap_err();
        assert!(matches!(err, GauntletError::Config(_)));
    }
}
