use serde::{Deserialize, Serialize};

use super::PatternKind;

/// Kind-specific parameter bag.
///
/// Each variant carries exactly the parameters its pattern family consumes, so
/// a bag can never disagree with its kind.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PatternParams {
    Stripe { stripe_size: f32 },
    StripeCircle { stripe_circle_size: f32 },
    StripePolygon { sides: u32, stripe_size: f32, radius: f32 },
    /// Wedge angle in radians, `[0, π]`.
    StripeRadial { radial_angle: f32 },
    Wave { amplitude: f32, frequency: f32, phase: f32, stripe_size: f32 },
    Dot { dot_size: f32, dot_spacing: f32 },
    Checked { checked_size: f32, checked_spacing: f32 },
    Cross { cross_size: f32, cross_weight: f32 },
    Triangle { triangle_size: f32, triangle_spacing: f32 },
    Noise { noise_scale: f32 },
    NoiseGrad { noise_scale: f32 },
}

impl PatternParams {
    pub const fn kind(&self) -> PatternKind {
        match self {
            PatternParams::Stripe { .. } => PatternKind::Stripe,
            PatternParams::StripeCircle { .. } => PatternKind::StripeCircle,
            PatternParams::StripePolygon { .. } => PatternKind::StripePolygon,
            PatternParams::StripeRadial { .. } => PatternKind::StripeRadial,
            PatternParams::Wave { .. } => PatternKind::Wave,
            PatternParams::Dot { .. } => PatternKind::Dot,
            PatternParams::Checked { .. } => PatternKind::Checked,
            PatternParams::Cross { .. } => PatternKind::Cross,
            PatternParams::Triangle { .. } => PatternKind::Triangle,
            PatternParams::Noise { .. } => PatternKind::Noise,
            PatternParams::NoiseGrad { .. } => PatternKind::NoiseGrad,
        }
    }
}
