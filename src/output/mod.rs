//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::Page;
use crate::error::Result;

pub mod json;
pub mod table;

use json::PageInfo;

/// Print a page of results as a table or JSON.
///
/// `T` is the API model, `D` its display row.
pub fn print_page<T, D>(page: Page<T>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    D: for<'a> From<&'a T> + Tabled,
{
    let output = match format {
        OutputFormat::Table => {
            let rows: Vec<D> = page.items.iter().map(D::from).collect();
            let mut output = table::format_table(&rows);
            if page.total_pages > 1 {
                output.push_str(&format!(
                    "\n{} entries across {} pages",
                    page.total_entries, page.total_pages
                ));
            }
            output
        }
        OutputFormat::Json => json::format_json_page(
            &page.items,
            PageInfo {
                total_entries: page.total_entries,
                total_pages: page.total_pages,
            },
        )?,
    };

    println!("{}", output);
    Ok(())
}

/// Print a single resource: key/value rows for tables, the model itself for JSON.
pub fn print_detail<T: Serialize>(
    value: &T,
    rows: Vec<(&'static str, String)>,
    format: OutputFormat,
) -> Result<()> {
    let output = match format {
        OutputFormat::Table => table::format_detail(&rows),
        OutputFormat::Json => json::format_json(value)?,
    };

    println!("{}", output);
    Ok(())
}
