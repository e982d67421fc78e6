use serde::{Deserialize, Serialize};

/// One entry of a UI picker list: the code stored in configuration plus
/// the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    pub code: String,
    pub text: String,
}

impl SelectionItem {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }
}
