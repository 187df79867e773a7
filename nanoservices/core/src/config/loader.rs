use std::path::Path;

use crate::config::types::SearchConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load a search config from a YAML file.
pub fn load_search(path: impl AsRef<Path>) -> Result<SearchConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_search(&content)
}

/// Parse a search config from a YAML string.
pub fn parse_search(yaml: &str) -> Result<SearchConfig, ConfigError> {
    let config: SearchConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Load all search configs from a directory.
pub fn load_searches_dir(dir: impl AsRef<Path>) -> Result<Vec<SearchConfig>, ConfigError> {
    let mut configs = Vec::new();
    let entries = std::fs::read_dir(dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("yaml")
            || path.extension().and_then(|e| e.to_str()) == Some("yml")
        {
            configs.push(load_search(path)?);
        }
    }
    tracing::debug!(count = configs.len(), "loaded search configs");
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Selector;
    use crate::config::types::Emit;
    use crate::roster::sample_roster;
    use std::io::Write;

    #[test]
    fn parse_simple_search() {
        let yaml = r#"
search: eligible_for_service
description: "Males between 18 and 25"

criteria:
  min_age: 18
  max_age: 25
  gender: male

emit: email
"#;

        let config = parse_search(yaml).unwrap();
        assert_eq!(config.search, "eligible_for_service");
        assert_eq!(
            config.description.as_deref(),
            Some("Males between 18 and 25")
        );
        assert_eq!(config.criteria.min_age, Some(18));
        assert_eq!(config.criteria.max_age, Some(25));
        assert_eq!(config.emit, Emit::Email);
    }

    #[test]
    fn emit_defaults_to_summary() {
        let yaml = r#"
search: adults
criteria:
  min_age: 18
"#;
        let config = parse_search(yaml).unwrap();
        assert_eq!(config.emit, Emit::Summary);
        assert!(config.criteria.gender.is_none());
    }

    #[test]
    fn criteria_build_a_working_selector() {
        let yaml = r#"
search: eligible_for_service
criteria:
  min_age: 18
  max_age: 25
  gender: male
"#;
        let config = parse_search(yaml).unwrap();
        let mut selector = config.criteria.selector();
        let accepted: Vec<String> = sample_roster()
            .into_iter()
            .filter(|p| selector.test(p).unwrap())
            .map(|p| p.name)
            .collect();
        assert_eq!(accepted, vec!["Fred"]);
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = parse_search("criteria: [not, a, mapping").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn load_searches_dir_skips_non_yaml() {
        let dir = tempfile::tempdir().unwrap();

        let mut yaml = std::fs::File::create(dir.path().join("adults.yaml")).unwrap();
        writeln!(yaml, "search: adults\ncriteria:\n  min_age: 18").unwrap();
        let mut other = std::fs::File::create(dir.path().join("notes.txt")).unwrap();
        writeln!(other, "not a config").unwrap();

        let configs = load_searches_dir(dir.path()).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].search, "adults");
    }
}
