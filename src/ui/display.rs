//! Formatting of rewrite progress and summaries

use console::Style;

use super::SummaryContext;
use crate::seed::{DroppedRecord, RewriteReport};

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// One line per removed record
pub fn dropped_line(dropped: &DroppedRecord) -> String {
    format!(
        "{} {} (category: {})",
        Style::new().red().apply_to("Removed:"),
        dropped.name,
        Style::new().dim().apply_to(&dropped.category)
    )
}

/// Closing summary: counts, then what happened to the file
pub fn summary(report: &RewriteReport, ctx: &SummaryContext<'_>) -> String {
    let mut lines = vec![
        String::new(),
        format!("Removed {}", plural(report.removed(), "product", "products")),
        format!("Kept {}", plural(report.kept, "product", "products")),
        String::new(),
    ];

    let path = ctx.path.display();
    if ctx.written {
        lines.push(format!(
            "{} Updated {}",
            Style::new().green().bold().apply_to("✓"),
            path
        ));
    } else {
        lines.push(format!(
            "{} Would update {}",
            Style::new().yellow().bold().apply_to("[DRY RUN]"),
            path
        ));
    }

    lines.push(format!(
        "   - Removed {} outside {}",
        plural(report.removed(), "product", "products"),
        ctx.allowed.join(", ")
    ));
    lines.push(format!(
        "   - {} remaining",
        plural(report.kept, "product", "products")
    ));
    lines.push(format!(
        "   - Each product with an images field has {}-{} images",
        ctx.min_images, ctx.max_images
    ));
    if report.without_images > 0 {
        lines.push(format!(
            "   - {} without an images field left unchanged",
            Style::new()
                .yellow()
                .apply_to(plural(report.without_images, "product", "products"))
        ));
    }

    lines.join("\n")
}
