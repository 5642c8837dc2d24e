use expander::GroupId;
use indexmap::IndexMap;

/// Mapping from a group id to the ordered list of group ids an operator
/// declared as acceptable substitutes for it.
pub type Alternatives = IndexMap<GroupId, Vec<GroupId>>;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("alternatives configuration is empty; please provide a valid mapping")]
    EmptyConfig,

    #[error("can't parse alternatives mapping: {0}")]
    MalformedConfig(#[from] serde_yaml::Error),
}

/// Parses the raw alternatives mapping.
///
/// The mapping comes back structurally unchanged: keys keep their written
/// order and value lists are passed through without deduplication or any
/// check that the listed group ids exist. Pure function; health accounting
/// is the caller's concern.
pub fn parse_alternatives(raw: &str) -> Result<Alternatives, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::EmptyConfig);
    }

    Ok(serde_yaml::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_structure_and_order() {
        let raw = "\
pool-b: [pool-c, pool-a]
pool-a:
  - pool-b
  - pool-d
";
        let alternatives = parse_alternatives(raw).unwrap();

        let keys: Vec<&GroupId> = alternatives.keys().collect();
        assert_eq!(keys, ["pool-b", "pool-a"]);
        assert_eq!(alternatives["pool-b"], ["pool-c", "pool-a"]);
        assert_eq!(alternatives["pool-a"], ["pool-b", "pool-d"]);

        // Identical input parses to an identical mapping.
        assert_eq!(parse_alternatives(raw).unwrap(), alternatives);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let alternatives = parse_alternatives("pool-a: [pool-b, pool-b]").unwrap();
        assert_eq!(alternatives["pool-a"], ["pool-b", "pool-b"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_alternatives("").unwrap_err(),
            ParseError::EmptyConfig
        ));
    }

    #[test]
    fn test_parse_malformed_input() {
        assert!(matches!(
            parse_alternatives("not: [valid, yaml: broken").unwrap_err(),
            ParseError::MalformedConfig(_)
        ));

        // Structurally valid text with the wrong shape is also malformed.
        assert!(matches!(
            parse_alternatives("pool-a: not-a-list").unwrap_err(),
            ParseError::MalformedConfig(_)
        ));
    }
}
