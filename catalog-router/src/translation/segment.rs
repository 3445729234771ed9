use serde::{Deserialize, Serialize};

/// A display label and the id of the entity that owns it.
///
/// The context id lets translation back-ends keep per-entity glossaries.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledSegment {
    pub text: String,
    pub context_id: String,
}

impl LabeledSegment {
    pub fn new(text: impl Into<String>, context_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context_id: context_id.into(),
        }
    }
}
