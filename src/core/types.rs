use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One bar of input data.
///
/// `name` is the identity key used to match rendered elements across draw
/// passes, so it must be unique within a drawn set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub highlight: bool,
}

impl DataPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            highlight: false,
        }
    }

    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}
