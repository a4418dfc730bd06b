pub mod json;
pub mod text;

pub const CHART_TITLE: &str = "Z-Scores of Cognitive Constructs";
pub const CHART_TITLE_EMPTY: &str = "No matching data to display";
pub const CHART_Y_RANGE: [f64; 2] = [-5.0, 1.0];

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_range(range: Option<(f64, f64)>) -> String {
    match range {
        Some((lo, hi)) if lo == hi => format_compact(lo),
        Some((lo, hi)) => format!("{}-{}", format_compact(lo), format_compact(hi)),
        None => "n/a".to_string(),
    }
}

/// Integers print without a fractional part; everything else with one decimal.
pub fn format_compact(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.1}", v)
    }
}

pub fn standing(z: f64) -> &'static str {
    if z >= 2.0 {
        "well above peers"
    } else if z >= 1.0 {
        "above peers"
    } else if z > -1.0 {
        "in line with peers"
    } else if z > -2.0 {
        "below peers"
    } else {
        "well below peers"
    }
}
