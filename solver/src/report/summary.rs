use crate::algorithms::SearchResult;

const RULE_WIDTH: usize = 80;

/// Fixed-width comparison table, one row per result.
pub fn summary_table(results: &[SearchResult]) -> String {
    let mut out = table_row("Algorithm", "Path Len", "Cost", "Explored", "Remaining");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for result in results {
        out.push_str(&table_row(
            result.name(),
            result.path().len(),
            result.cost(),
            result.explored(),
            result.remaining(),
        ));
    }
    out
}

fn table_row(
    name: impl std::fmt::Display,
    path_len: impl std::fmt::Display,
    cost: impl std::fmt::Display,
    explored: impl std::fmt::Display,
    remaining: impl std::fmt::Display,
) -> String {
    // Padding only applies through `to_string`; `Cost`'s Display ignores width.
    format!(
        "{:<30} {:<10} {:<10} {:<12} {:<12}\n",
        name.to_string(),
        path_len.to_string(),
        cost.to_string(),
        explored.to_string(),
        remaining.to_string()
    )
}

/// The same data as [`summary_table`] as comma-separated values.
pub fn summary_csv(results: &[SearchResult]) -> String {
    let mut out = String::from("Algorithm,Path Len,Cost,Explored,Remaining\n");
    for result in results {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(result.name()),
            result.path().len(),
            result.cost(),
            result.explored(),
            result.remaining()
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
