use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Procedural fill families understood by the pattern backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    Stripe,
    StripeCircle,
    StripePolygon,
    StripeRadial,
    Wave,
    Dot,
    Checked,
    Cross,
    Triangle,
    Noise,
    NoiseGrad,
}

impl PatternKind {
    pub const ALL: [PatternKind; 11] = [
        PatternKind::Stripe,
        PatternKind::StripeCircle,
        PatternKind::StripePolygon,
        PatternKind::StripeRadial,
        PatternKind::Wave,
        PatternKind::Dot,
        PatternKind::Checked,
        PatternKind::Cross,
        PatternKind::Triangle,
        PatternKind::Noise,
        PatternKind::NoiseGrad,
    ];

    /// Name used by the input surface (`patternType` values).
    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::Stripe => "stripe",
            PatternKind::StripeCircle => "stripeCircle",
            PatternKind::StripePolygon => "stripePolygon",
            PatternKind::StripeRadial => "stripeRadial",
            PatternKind::Wave => "wave",
            PatternKind::Dot => "dot",
            PatternKind::Checked => "checked",
            PatternKind::Cross => "cross",
            PatternKind::Triangle => "triangle",
            PatternKind::Noise => "noise",
            PatternKind::NoiseGrad => "noiseGrad",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized pattern name; carries the rejected text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPatternKind(pub String);

impl FromStr for PatternKind {
    type Err = UnknownPatternKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownPatternKind(s.to_string()))
    }
}
