//! Static description of the token vocabulary.

use serde::{Deserialize, Serialize};

use crate::parser::category::Category;

/// One entry of the token vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexDescr {
    /// Category id; 0 marks the end of the list.
    pub lexid: i32,
    /// Short name.
    pub alias: String,
    /// Human-readable description.
    pub descr: String,
}

impl LexDescr {
    /// The terminating entry.
    pub fn sentinel() -> Self {
        LexDescr {
            lexid: 0,
            alias: String::new(),
            descr: String::new(),
        }
    }

    /// Whether this is the terminating entry.
    pub fn is_sentinel(&self) -> bool {
        self.lexid == 0
    }
}

impl From<Category> for LexDescr {
    fn from(category: Category) -> Self {
        LexDescr {
            lexid: category.id(),
            alias: category.alias().to_string(),
            descr: category.description().to_string(),
        }
    }
}

/// The five categories in id order, followed by the sentinel.
pub fn lextype() -> Vec<LexDescr> {
    Category::ALL
        .into_iter()
        .map(LexDescr::from)
        .chain(std::iter::once(LexDescr::sentinel()))
        .collect()
}
