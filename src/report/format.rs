//! Plain-text formatting of laws and evaluated curves.
//!
//! We keep formatting code in one place so:
//! - the numeric pipeline stays free of presentation concerns
//! - output changes are localized

use crate::curve::build_anchor_curve;
use crate::domain::{ExtinctionCurve, LawParameters};

/// Header plus one row per wavelength.
pub fn format_curve_table(curve: &ExtinctionCurve) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", curve.law));
    out.push_str(&format!(
        "Rv: {:.3} | normalized to {} | points: {}\n",
        curve.rv,
        curve.reference,
        curve.len()
    ));
    out.push('\n');

    let ratio_header = format!("A/{}", curve.reference);
    out.push_str(
        format!(
            "{:>12} {:>10} {:>12} {:>12}",
            "lambda[A]", "x[1/um]", "A/E(B-V)", ratio_header
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<10} {:-<12} {:-<12}", "", "", "", "").trim_end());
    out.push('\n');

    for i in 0..curve.len() {
        out.push_str(&format!(
            "{:>12.1} {:>10.4} {:>12.4} {:>12.4}\n",
            curve.wavelengths[i], curve.inverse_microns[i], curve.a_over_ebv[i], curve.normalized[i],
        ));
    }

    out
}

/// The law's coefficients and its anchor values at `rv`.
pub fn format_law_summary(params: &LawParameters, rv: f64) -> String {
    let mut out = String::new();
    let uv = &params.uv;

    out.push_str(&format!("Law: {} (normalized to {})\n", params.name, params.reference));
    out.push_str(&format!(
        "UV: c2={} c3={:.4} c4={:.4} c5={:.3} x0={:.3} gamma={:.3}\n",
        fmt_vec(&uv.c2),
        uv.c3,
        uv.c4,
        uv.c5,
        uv.x0,
        uv.gamma
    ));
    out.push_str(&format!(
        "UV cutoff: {:.0} A | UV boundary: {:.0} A, {:.0} A\n",
        params.uv_cutoff, params.uv_boundary[0], params.uv_boundary[1]
    ));

    out.push_str(&format!("\nAnchors at Rv={rv:.3}:\n"));
    let anchors = build_anchor_curve(params, rv);
    for (x, y) in anchors.x.iter().zip(&anchors.y) {
        out.push_str(&format!("  x={x:>8.4}  y={y:>9.5}\n"));
    }

    out
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.4}")).collect();
    format!("[{}]", parts.join(", "))
}
