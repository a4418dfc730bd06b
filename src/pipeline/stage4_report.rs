use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::Query;
use crate::pipeline::CohortResult;
use crate::report::json::{render_chart_json, render_engine_json};
use crate::report::text::render_report_text;

pub const ENGINE_FILE: &str = "zscores.json";
pub const CHART_FILE: &str = "plot.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub engine: PathBuf,
    pub chart: PathBuf,
    pub report: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub result: &'a CohortResult,
    pub query: &'a Query,
    pub source: &'a str,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> std::io::Result<ReportPaths> {
    fs::create_dir_all(out_dir)?;

    let paths = ReportPaths {
        engine: out_dir.join(ENGINE_FILE),
        chart: out_dir.join(CHART_FILE),
        report: out_dir.join(REPORT_FILE),
    };

    write_text(&paths.engine, &render_engine_json(input.result)?)?;
    write_text(&paths.chart, &render_chart_json(input.result)?)?;
    write_text(
        &paths.report,
        &render_report_text(input.result, input.query, input.source),
    )?;

    info!(
        "reports written: {}, {}, {}",
        paths.engine.display(),
        paths.chart.display(),
        paths.report.display()
    );
    Ok(paths)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
