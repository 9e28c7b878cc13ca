use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Normalized BI-RADS assessment category.
///
/// The model returns the category as free text ("4", "4a", "BI-RADS 4A",
/// "categoria 3"); this enum is the canonical form used by the batch
/// summary. Category 4 subdivides into A/B/C when the report does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BiRads {
    Category0,
    Category1,
    Category2,
    Category3,
    Category4,
    Category4A,
    Category4B,
    Category4C,
    Category5,
    Category6,
}

impl BiRads {
    /// Parse a free-text BI-RADS value. Returns `None` for anything
    /// unrecognized — normalization never fails the pipeline.
    pub fn parse(text: &str) -> Option<BiRads> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN
            .get_or_init(|| Regex::new(r"(?i)\b([0-6])\s*([abc])?\b").expect("valid regex"));

        let captures = re.captures(text)?;
        let digit = captures.get(1)?.as_str();
        let letter = captures
            .get(2)
            .map(|m| m.as_str().to_ascii_lowercase());

        match (digit, letter.as_deref()) {
            ("0", _) => Some(Self::Category0),
            ("1", _) => Some(Self::Category1),
            ("2", _) => Some(Self::Category2),
            ("3", _) => Some(Self::Category3),
            ("4", Some("a")) => Some(Self::Category4A),
            ("4", Some("b")) => Some(Self::Category4B),
            ("4", Some("c")) => Some(Self::Category4C),
            ("4", _) => Some(Self::Category4),
            ("5", _) => Some(Self::Category5),
            ("6", _) => Some(Self::Category6),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category0 => "0",
            Self::Category1 => "1",
            Self::Category2 => "2",
            Self::Category3 => "3",
            Self::Category4 => "4",
            Self::Category4A => "4A",
            Self::Category4B => "4B",
            Self::Category4C => "4C",
            Self::Category5 => "5",
            Self::Category6 => "6",
        }
    }

    /// Category 4 and above: findings that warrant tissue diagnosis.
    pub fn is_suspicious(&self) -> bool {
        *self >= Self::Category4
    }
}

impl fmt::Display for BiRads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
