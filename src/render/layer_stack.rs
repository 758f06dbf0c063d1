use serde::{Deserialize, Serialize};

/// Persistent element groups of a bar chart, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    YLabels,
    Bars,
    XValues,
    XLabels,
}

impl LayerKind {
    pub const CANONICAL_ORDER: [Self; 4] = [Self::YLabels, Self::Bars, Self::XValues, Self::XLabels];

    /// Position of the layer in paint order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::YLabels => 0,
            Self::Bars => 1,
            Self::XValues => 2,
            Self::XLabels => 3,
        }
    }

    /// Class name carried by the layer's group element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::YLabels => "ylabels",
            Self::Bars => "bars",
            Self::XValues => "xvalues",
            Self::XLabels => "xlabels",
        }
    }
}
