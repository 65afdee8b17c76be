//! Token categories and the rule-status classifier.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::segment::engine::{
    RULE_STATUS_IDEO, RULE_STATUS_KANA, RULE_STATUS_LETTER, RULE_STATUS_NUMBER,
};

/// The kind of a token produced by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Word, containing normal letters
    Word,
    /// Numeric value
    Number,
    /// Space and punctuation symbols
    Blank,
    /// Word, composed of Japanese Kana characters
    Kana,
    /// Ideographic characters
    #[serde(rename = "ideo")]
    Ideographic,
}

/// Rule-status ranges in match order. Statuses outside every range are blank.
const STATUS_TABLE: [(Range<i32>, Category); 4] = [
    (RULE_STATUS_LETTER, Category::Word),
    (RULE_STATUS_NUMBER, Category::Number),
    (RULE_STATUS_KANA, Category::Kana),
    (RULE_STATUS_IDEO, Category::Ideographic),
];

/// Map an engine rule status to a category.
///
/// Total: anything not covered by a word, number, Kana or ideographic range
/// (whitespace, punctuation, unknown codes) is [`Category::Blank`].
pub fn classify(rule_status: i32) -> Category {
    STATUS_TABLE
        .iter()
        .find(|(range, _)| range.contains(&rule_status))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Blank)
}

impl Category {
    /// Every category, ordered by id.
    pub const ALL: [Category; 5] = [
        Category::Word,
        Category::Number,
        Category::Blank,
        Category::Kana,
        Category::Ideographic,
    ];

    /// Stable numeric id (1-5). Id 0 is reserved for end-of-stream.
    pub fn id(&self) -> i32 {
        match self {
            Category::Word => 1,
            Category::Number => 2,
            Category::Blank => 3,
            Category::Kana => 4,
            Category::Ideographic => 5,
        }
    }

    /// Look up a category by id.
    pub fn from_id(id: i32) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.id() == id)
    }

    /// Short name.
    pub fn alias(&self) -> &'static str {
        match self {
            Category::Word => "word",
            Category::Number => "number",
            Category::Blank => "blank",
            Category::Kana => "kana",
            Category::Ideographic => "ideo",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Word => "Word, containing normal letters",
            Category::Number => "Numeric value",
            Category::Blank => "Space and punctuation symbols",
            Category::Kana => "Word, composed of Japanese Kana characters",
            Category::Ideographic => "Ideographic characters",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_edges() {
        assert_eq!(classify(0), Category::Blank);
        assert_eq!(classify(99), Category::Blank);
        assert_eq!(classify(100), Category::Number);
        assert_eq!(classify(199), Category::Number);
        assert_eq!(classify(200), Category::Word);
        assert_eq!(classify(299), Category::Word);
        assert_eq!(classify(300), Category::Kana);
        assert_eq!(classify(399), Category::Kana);
        assert_eq!(classify(400), Category::Ideographic);
        assert_eq!(classify(499), Category::Ideographic);
        assert_eq!(classify(500), Category::Blank);
    }

    #[test]
    fn test_out_of_range_falls_back_to_blank() {
        assert_eq!(classify(-1), Category::Blank);
        assert_eq!(classify(i32::MIN), Category::Blank);
        assert_eq!(classify(i32::MAX), Category::Blank);
    }

    #[test]
    fn test_ids_round_trip() {
        let ids: Vec<i32> = Category::ALL.iter().map(Category::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(Category::from_id(4), Some(Category::Kana));
        assert_eq!(Category::from_id(0), None);
    }

    #[test]
    fn test_serde_uses_alias() {
        assert_eq!(
            serde_json::to_string(&Category::Ideographic).unwrap(),
            "\"ideo\""
        );
        assert_eq!(serde_json::to_string(&Category::Word).unwrap(), "\"word\"");
    }
}
