use std::fmt;

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Detail placeholder the prompt mandates when the report gives no
/// location or size for a finding.
pub const NO_REFERENCE: &str = "[sem referência no texto]";

/// The four finding categories tracked per report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Cyst,
    Nodule,
    Calcification,
    Microcalcification,
}

impl FindingCategory {
    /// All four categories, in output order.
    pub fn all() -> &'static [FindingCategory] {
        &[
            Self::Cyst,
            Self::Nodule,
            Self::Calcification,
            Self::Microcalcification,
        ]
    }

    /// Wire name used in the output JSON (original report vocabulary).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cyst => "cisto",
            Self::Nodule => "nodulo",
            Self::Calcification => "calcificacao",
            Self::Microcalcification => "microcalcificacao",
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presence flag plus free-text detail for one finding category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "presente")]
    pub present: bool,
    #[serde(rename = "detalhes")]
    pub details: String,
}

impl Default for Finding {
    fn default() -> Self {
        Self {
            present: false,
            details: NO_REFERENCE.to_string(),
        }
    }
}

/// One structured analysis per input report. Serialized with the
/// original Portuguese wire names so outputs stay compatible with
/// downstream consumers of the report JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamAnalysis {
    #[serde(rename = "cisto")]
    pub cyst: Finding,
    #[serde(rename = "nodulo")]
    pub nodule: Finding,
    #[serde(rename = "calcificacao")]
    pub calcification: Finding,
    #[serde(rename = "microcalcificacao")]
    pub microcalcification: Finding,
    pub bi_rads: String,
    #[serde(rename = "outras_citacoes")]
    pub notes: String,
}

impl ExamAnalysis {
    /// Access one category slot uniformly.
    pub fn finding(&self, category: FindingCategory) -> &Finding {
        match category {
            FindingCategory::Cyst => &self.cyst,
            FindingCategory::Nodule => &self.nodule,
            FindingCategory::Calcification => &self.calcification,
            FindingCategory::Microcalcification => &self.microcalcification,
        }
    }
}

/// Gemini LLM client abstraction (allows mocking)
pub trait LlmClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AnalysisError>;
}
