/// Highest score a record may carry.
pub const MAX_SCORE: u8 = 100;

/// One student's identifier and score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub score: u8,
}

impl Record {
    pub fn new(id: impl Into<String>, score: u8) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// A record together with its 1-based position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub position: u32,
    pub record: Record,
}

impl std::fmt::Display for ListedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.position, self.record.id, self.record.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_record_displays_position_id_and_score() {
        let listed = ListedRecord {
            position: 3,
            record: Record::new("a00000001", 55),
        };
        assert_eq!(listed.to_string(), "3 a00000001 55");
    }

    #[test]
    fn default_record_is_empty() {
        let record = Record::default();
        assert!(record.id.is_empty());
        assert_eq!(record.score, 0);
    }
}
