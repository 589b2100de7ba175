//! The two built-in R136 laws.
//!
//! Both share the R136-tailored UV curve (bump shape from Gordon et al. 2003,
//! far-UV curvature onset from Fitzpatrick 1999) and differ in the UV slope and
//! far-UV strength and in their optical/NIR anchor tables.

use crate::domain::{Anchor, LawParameters, LawVariant, UvCoefficients};

const UV_CUTOFF: f64 = 2700.0;
const UV_BOUNDARY: [f64; 2] = [2700.0, 2600.0];

const BUMP_C3: f64 = 1.463;
const BUMP_X0: f64 = 4.558;
const BUMP_GAMMA: f64 = 0.945;
const FUV_C5: f64 = 5.9;

impl LawVariant {
    /// Parameter table for this preset.
    pub fn parameters(self) -> LawParameters {
        match self {
            LawVariant::R136Fitzpatrick => r136_fitzpatrick(),
            LawVariant::R136MaizApellaniz => r136_maiz_apellaniz(),
        }
    }
}

/// UV part tailored to R136; optical/NIR anchors as in Fitzpatrick (1999).
/// `Rv` is the total-to-selective ratio and the output is `A(λ)/A(V)`.
fn r136_fitzpatrick() -> LawParameters {
    LawParameters {
        name: "r136_fitzpatrick".to_string(),
        reference: "A(V)".to_string(),
        uv: UvCoefficients {
            c2: vec![0.78, 0.11],
            c3: BUMP_C3,
            c4: 0.13,
            c5: FUV_C5,
            x0: BUMP_X0,
            gamma: BUMP_GAMMA,
        },
        uv_cutoff: UV_CUTOFF,
        uv_boundary: UV_BOUNDARY,
        anchors: vec![
            Anchor::ratio(26500.0, 0.26469),
            Anchor::ratio(12200.0, 0.82925),
            Anchor::polynomial(6000.0, &[-4.22809e-01, 1.0027, 2.13572e-04]),
            Anchor::polynomial(5470.0, &[-5.13540e-02, 1.00216, -7.35778e-05]),
            Anchor::polynomial(4670.0, &[7.00127e-01, 1.00184, -3.32598e-05]),
            Anchor::polynomial(
                4110.0,
                &[1.19456, 1.01707, -5.46959e-03, 7.97809e-04, -4.45636e-05],
            ),
        ],
    }
}

/// UV part from the R136 average; optical/NIR shape from Maíz Apellániz et al.
/// (2014) in a Fitzpatrick-like parameterization. `Rv` is the monochromatic
/// `R5495 = A(5495)/(A(4405) - A(5495))` and the output is `A(λ)/A(5495)`.
fn r136_maiz_apellaniz() -> LawParameters {
    LawParameters {
        name: "r136_maiz_apellaniz".to_string(),
        reference: "A(5495)".to_string(),
        uv: UvCoefficients {
            c2: vec![1.30],
            c3: BUMP_C3,
            c4: 0.09,
            c5: FUV_C5,
            x0: BUMP_X0,
            gamma: BUMP_GAMMA,
        },
        uv_cutoff: UV_CUTOFF,
        uv_boundary: UV_BOUNDARY,
        anchors: vec![
            Anchor::polynomial(26500.0, &[-0.1097, 0.1195]),
            Anchor::polynomial(18000.0, &[-0.2046, 0.2228]),
            Anchor::polynomial(12200.0, &[-0.3826, 0.4167]),
            Anchor::polynomial(10000.0, &[-0.5270, 0.5740]),
            Anchor::polynomial(8696.0, &[-0.6392, 0.7147]),
            Anchor::polynomial(5495.0, &[-0.0002, 1.0000]),
            Anchor::polynomial(4670.0, &[0.7455, 1.0023]),
            Anchor::polynomial(4405.0, &[1.0004, 1.0000]),
            Anchor::polynomial(4110.0, &[1.3149, 0.9887]),
            Anchor::polynomial(3704.0, &[1.7931, 0.9661]),
            Anchor::polynomial(3304.0, &[2.2580, 0.9689]),
        ],
    }
}
