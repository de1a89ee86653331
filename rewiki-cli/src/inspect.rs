//! Pass-by-pass views of a conversion
//!
//! Debugging a conversion is mostly a matter of finding the pass that did something
//! unexpected. These views run the pipeline with [`Pipeline::trace`] and render the text
//! as it stood after each pass:
//!
//! - `trace`: every pass, with its output
//! - `trace-json`: the same, as a JSON array of `{pass, stage, output}`
//! - `changes`: only the passes that altered the text
//!
//! Example: `rewiki inspect page.wiki changes`

use rewiki_babel::{DialectRules, PassTrace, Pipeline};

/// All available inspect views
pub const AVAILABLE_VIEWS: &[&str] = &["trace", "trace-json", "changes"];

/// Render the view `view_name` of the conversion of `source`
pub fn execute_view(
    source: &str,
    view_name: &str,
    rules: &DialectRules,
) -> Result<String, String> {
    let pipeline = Pipeline::with_rules(rules);
    let steps = pipeline
        .trace(source)
        .map_err(|e| format!("Conversion failed: {e}"))?;

    match view_name {
        "trace" => Ok(render_steps(steps.iter().enumerate())),
        "trace-json" => serde_json::to_string_pretty(&steps)
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "changes" => {
            let changed = steps.iter().enumerate().filter(|(i, step)| {
                let before = match i.checked_sub(1) {
                    Some(prev) => steps[prev].output.as_str(),
                    None => source,
                };
                step.output != before
            });
            Ok(render_steps(changed))
        }
        _ => Err(format!(
            "Unknown view '{view_name}'. Available: {}",
            AVAILABLE_VIEWS.join(", ")
        )),
    }
}

fn render_steps<'a>(steps: impl Iterator<Item = (usize, &'a PassTrace)>) -> String {
    let mut out = String::new();
    for (i, step) in steps {
        out.push_str(&format!("--- {}. {} [{}] ---\n", i + 1, step.pass, step.stage));
        out.push_str(&step.output);
        if !step.output.is_empty() && !step.output.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
