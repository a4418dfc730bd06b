use crate::model::Query;
use crate::pipeline::CohortResult;
use crate::report::{format_f64_3, format_range, standing};

pub fn render_report_text(result: &CohortResult, query: &Query, source: &str) -> String {
    let mut out = String::new();

    out.push_str("Cognitive Construct Peer Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Peer cohort\n");
    out.push_str(&format!("Population source: {}\n", source));
    out.push_str(&format!("Your age: {}, your IQ: {}\n", query.age, query.iq));
    out.push_str(&format!("Matched peers: {}\n", result.cohort_size));
    if result.is_empty_cohort() {
        out.push_str("No peers matched your age and IQ; all z-scores are reported as 0.\n\n");
    } else {
        out.push_str(&format!(
            "Your peers span ages {} and IQ {}\n\n",
            format_range(result.age_range),
            format_range(result.iq_range)
        ));
    }

    out.push_str("2. Constructs\n");
    for s in &result.scores {
        let (mean, sd, n) = match s.stats {
            Some(st) => (format_f64_3(st.mean), format_f64_3(st.std_dev), st.n),
            None => ("n/a".to_string(), "n/a".to_string(), 0),
        };
        out.push_str(&format!(
            "{:<5} you={} mean={} sd={} n={} z={} ({})\n",
            s.construct.name(),
            format_f64_3(s.value),
            mean,
            sd,
            n,
            format_f64_3(s.z),
            standing(s.z)
        ));
    }

    let flat = result
        .scores
        .iter()
        .filter(|s| s.stats.is_none_or(|st| st.std_dev <= 0.0))
        .count();
    if flat > 0 && !result.is_empty_cohort() {
        out.push_str(&format!(
            "\nNote: {} construct(s) had no spread among peers; their z-score is 0.\n",
            flat
        ));
    }

    out
}
