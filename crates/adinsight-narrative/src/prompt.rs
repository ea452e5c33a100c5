//! Fixed instruction template for the narrative services.

use adinsight_core::MetricsSummary;

use crate::error::NarrativeError;

/// Build the single request prompt from the aggregated summary and optional
/// free-text context. Raw rows never reach the service: the payload is the
/// JSON-serialized [`MetricsSummary`] plus the fixed instruction template.
pub(crate) fn build_prompt(
    summary: &MetricsSummary,
    context: Option<&str>,
) -> Result<String, NarrativeError> {
    let summary_json = serde_json::to_string_pretty(summary)?;

    let mut prompt = format!(
        "You are a senior marketing analyst preparing an executive summary \
         of advertising campaign performance.\n\
         \n\
         AGGREGATED METRICS (JSON):\n{summary_json}\n"
    );

    if let Some(text) = context.map(str::trim).filter(|t| !t.is_empty()) {
        prompt.push_str(&format!("\nCLIENT CONTEXT:\n{text}\n"));
    }

    prompt.push_str(
        "\nTASK:\n\
         - Identify the most important trends, peaks, and troughs in the period.\n\
         - Compare per-platform efficiency using CTR and CPC.\n\
         - Write EXACTLY 3 bullet points, one per line, no headings or preamble.\n\
         - Keep the tone professional and action-oriented.\n",
    );

    Ok(prompt)
}
