use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

/// Longest cell before truncation in table output.
const MAX_CELL: usize = 48;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: Value) -> String {
    match value {
        Value::Array(items) => {
            let rows: Vec<Map<String, Value>> = items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => map,
                    other => Map::from_iter([("value".to_string(), other)]),
                })
                .collect();
            if rows.is_empty() {
                return String::from("(no rows)");
            }
            let mut headers: Vec<String> = Vec::new();
            for key in rows.iter().flat_map(Map::keys) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let cells = rows
                .iter()
                .map(|row| {
                    headers
                        .iter()
                        .map(|header| row.get(header).map_or_else(|| "-".to_string(), cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            align(&headers, &cells)
        }
        Value::Object(map) => {
            let headers = vec!["key".to_string(), "value".to_string()];
            let cells = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            align(&headers, &cells)
        }
        scalar => cell(&scalar),
    }
}

fn align(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{value:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_line = line(headers);
    let divider = "-".repeat(header_line.chars().count());
    let mut lines = vec![header_line, divider];
    lines.extend(rows.iter().map(|row| line(row.as_slice())));
    lines.join("\n")
}

fn cell(value: &Value) -> String {
    let text = match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    };
    truncate(&text)
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL {
        return value.to_string();
    }
    let mut out: String = value.chars().take(MAX_CELL - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        tags: Vec<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: "e-1",
            tags: vec!["rf"],
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "e-1");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            id: "e-1",
            tags: vec![],
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_lists_rows_with_joined_tags() {
        let rows = vec![
            Example {
                id: "e-1",
                tags: vec!["rf", "beam"],
            },
            Example {
                id: "e-200",
                tags: vec![],
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("rf,beam"));
    }

    #[test]
    fn table_render_of_empty_list() {
        let rows: Vec<Example> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(100);
        let out = render(&serde_json::json!([{ "title": long }]), OutputFormat::Table).unwrap();
        assert!(out.lines().nth(2).unwrap().ends_with('…'));
    }
}
