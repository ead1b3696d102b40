use crate::{RenderableReport, RenderableSeverity, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Pinguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    let mode = if report.data.strict {
        "strict"
    } else {
        "lenient"
    };
    out.push_str(&format!(
        "- Verdict: **{}** ({})\n- Dependencies: {} evaluated / {} declared\n- Concrete versions: {}\n\n",
        verdict,
        mode,
        report.data.dependencies_evaluated,
        report.data.dependencies_total,
        report.findings.len()
    ));

    if report.data.short_circuited {
        out.push_str("> Note: evaluation stopped at the first violation.\n\n");
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!("- [{}] `{}` / `{}`: {}", sev, f.check_id, f.code, f.message));
        if let Some(loc) = &f.location {
            match loc.line {
                Some(line) => out.push_str(&format!(" (`{}`:{})", loc.path, line)),
                None => out.push_str(&format!(" (`{}`)", loc.path)),
            }
        }
        out.push('\n');

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
