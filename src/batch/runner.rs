use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{
    build_analysis_prompt, parse_analysis_response, AnalysisError, ExamAnalysis, LlmClient,
};
use crate::batch::report::BatchSummary;
use crate::batch::BatchError;
use crate::config::Settings;

/// Suffix appended to the input stem for the output file.
pub const OUTPUT_SUFFIX: &str = "_analise.json";

/// Reports shorter than this are rejected before calling the model.
const MIN_REPORT_CHARS: usize = 10;

/// Collect all `.txt` report files in a directory, sorted by name.
pub fn collect_report_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::DirectoryNotFound(dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// `exam_042.txt` → `exam_042_analise.json`, next to the input.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("exame");
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Analyze a single report file and write its sibling JSON output.
pub fn analyze_file<C: LlmClient>(
    client: &C,
    settings: &Settings,
    path: &Path,
) -> Result<ExamAnalysis, BatchError> {
    let report_text = fs::read_to_string(path)?;
    if report_text.trim().chars().count() < MIN_REPORT_CHARS {
        return Err(AnalysisError::InputTooShort.into());
    }

    let prompt = build_analysis_prompt(&report_text);
    let response = client.generate(&settings.model, &prompt)?;
    let analysis = parse_analysis_response(&response)?;

    let output_path = output_path_for(path);
    fs::write(&output_path, serde_json::to_string_pretty(&analysis)?)?;

    tracing::info!(
        input = %path.display(),
        output = %output_path.display(),
        "analysis saved"
    );
    Ok(analysis)
}

/// Process every report in the directory, isolating per-file failures.
pub fn run_batch<C: LlmClient>(
    client: &C,
    settings: &Settings,
    dir: &Path,
) -> Result<BatchSummary, BatchError> {
    let files = collect_report_files(dir)?;
    if files.is_empty() {
        tracing::warn!(dir = %dir.display(), "no .txt report files found");
        return Ok(BatchSummary::default());
    }

    tracing::info!(
        count = files.len(),
        dir = %dir.display(),
        model = %settings.model,
        "starting batch analysis"
    );

    let mut summary = BatchSummary::default();
    for path in files {
        tracing::info!(file = %path.display(), "processing report");
        match analyze_file(client, settings, &path) {
            Ok(analysis) => summary.record_success(&analysis),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping report");
                summary.record_failure(path, e.to_string());
            }
        }
    }

    Ok(summary)
}
