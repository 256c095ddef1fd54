use crate::reference::ReferenceTable;
use crate::scoring::detail::ContributionDetail;
use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# DII Report\n\n");
    output.push_str(&format!("Source: {}\n\n", report.source.label()));

    output.push_str(&format!(
        "## Average ({} day{})\n\n",
        report.average.days,
        if report.average.days == 1 { "" } else { "s" }
    ));
    output.push_str(&format!(
        "DII score: {:.2} ({})\n\n",
        report.average.score,
        report.average.interpretation.label()
    ));
    if report.average.contributors.is_empty() {
        output.push_str("- no nutrients scored\n\n");
    } else {
        for contribution in &report.average.contributors {
            output.push_str(&format!(
                "- {}: {:+.3}\n",
                contribution.nutrient, contribution.weighted_score
            ));
        }
        output.push('\n');
    }

    output.push_str("## Days\n\n");
    for day in &report.days {
        output.push_str(&format!(
            "### {}\n\nDII score: {:.2} ({}), {} nutrient(s) scored\n\n",
            day.date,
            day.score,
            day.interpretation.label(),
            day.nutrients_scored
        ));
        if day.contributors.is_empty() {
            output.push_str("- no nutrients scored\n\n");
            continue;
        }
        output.push_str("| Nutrient | Intake | Global mean | Impact | % of total | Advice |\n");
        output.push_str("|---|---|---|---|---|---|\n");
        for detail in &day.contributors {
            output.push_str(&contributor_row(detail));
        }
        output.push('\n');
    }

    if !report.unused_columns.is_empty() {
        output.push_str("## Unused columns\n\n");
        output.push_str(&format!("{}\n", report.unused_columns.join(", ")));
    }

    output
}

fn contributor_row(detail: &ContributionDetail) -> String {
    let share = detail
        .share_of_total
        .map(|share| format!("{share:.1}%"))
        .unwrap_or_else(|| "N/A".to_string());
    let marker = if detail.advice.is_counter_intuitive() {
        " *"
    } else {
        ""
    };
    format!(
        "| {}{} | {:.1} | {:.1} | {:+.3} | {} | {} |\n",
        detail.name,
        marker,
        detail.intake,
        detail.global_mean,
        detail.weighted_score,
        share,
        detail.advice.message()
    )
}

pub fn reference_to_markdown(reference: &ReferenceTable) -> String {
    let mut output = String::new();
    output.push_str("# DII Reference Table\n\n");
    if reference.is_empty() {
        output.push_str("- no nutrients\n");
        return output;
    }
    output.push_str("| Code | Nutrient | Effect | Global mean | SD |\n");
    output.push_str("|---|---|---|---|---|\n");
    for spec in reference.iter() {
        output.push_str(&format!(
            "| {} | {} | {:+.3} | {} | {} |\n",
            spec.id, spec.name, spec.inflammatory_score, spec.global_mean, spec.global_sd
        ));
    }
    output.push_str(&format!("\n{} nutrients\n", reference.len()));
    output
}
