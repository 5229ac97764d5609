//! Domain entities: the `A)B` edge record notation

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// One direct orbit relationship: `parent)child`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub parent: String,
    pub child: String,
}

impl EdgeRecord {
    /// Parse a single `A)B` record. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> DomainResult<Self> {
        let trimmed = line.trim();
        let (parent, child) =
            trimmed
                .split_once(')')
                .ok_or_else(|| DomainError::InvalidRecord {
                    line: trimmed.to_string(),
                    reason: "missing ')' separator".to_string(),
                })?;

        let parent = parent.trim();
        let child = child.trim();
        if parent.is_empty() || child.is_empty() {
            return Err(DomainError::InvalidRecord {
                line: trimmed.to_string(),
                reason: "empty tag".to_string(),
            });
        }
        if child.contains(')') {
            return Err(DomainError::InvalidRecord {
                line: trimmed.to_string(),
                reason: "more than one ')' separator".to_string(),
            });
        }

        Ok(Self {
            parent: parent.to_string(),
            child: child.to_string(),
        })
    }

    /// Parse a whole map document, one record per line. Blank lines and `#`
    /// comments are skipped.
    pub fn parse_document(content: &str) -> DomainResult<Vec<Self>> {
        let mut records = Vec::new();
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            records.push(Self::parse(trimmed)?);
        }
        Ok(records)
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}){}", self.parent, self.child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("COM)B", "COM", "B")]
    #[case("  K)YOU  ", "K", "YOU")]
    #[case("A ) B", "A", "B")]
    fn test_parse_valid_record(#[case] line: &str, #[case] parent: &str, #[case] child: &str) {
        let record = EdgeRecord::parse(line).unwrap();
        assert_eq!(record.parent, parent);
        assert_eq!(record.child, child);
    }

    #[rstest]
    #[case("COM-B")]
    #[case(")B")]
    #[case("COM)")]
    #[case("A)B)C")]
    #[case("")]
    fn test_parse_invalid_record(#[case] line: &str) {
        let result = EdgeRecord::parse(line);
        assert!(matches!(result, Err(DomainError::InvalidRecord { .. })));
    }

    #[test]
    fn test_display_round_trip() {
        let record = EdgeRecord::parse("COM)B").unwrap();
        assert_eq!(record.to_string(), "COM)B");
    }

    #[test]
    fn test_parse_document_skips_blanks_and_comments() {
        let content = "# sample map\nCOM)B\n\nB)C\n  # trailing comment\n";
        let records = EdgeRecord::parse_document(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].to_string(), "COM)B");
        assert_eq!(records[1].to_string(), "B)C");
    }

    #[test]
    fn test_parse_document_propagates_bad_record() {
        let content = "COM)B\nbogus\n";
        assert!(EdgeRecord::parse_document(content).is_err());
    }
}
