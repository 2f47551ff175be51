//! A labelled document, the unit of bulk learning.

use serde::{Deserialize, Serialize};

/// One `{class, text}` entry of a bulk learn/forget batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub class: String,
    pub text: String,
}

impl Document {
    pub fn new(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: text.into(),
        }
    }
}
