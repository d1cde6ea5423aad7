//! Fields command handler

use anyhow::Result;

use caltally::report::{SheetField, SummarizeKind};

/// Field table: column, header label, accepted names.
pub fn fields_listing() -> String {
    let mut out = String::from("Report fields (column: names):\n");
    for field in SheetField::ALL {
        out.push_str(&format!(
            "  {}  {:<10} {}\n",
            field.column(),
            field.label(),
            field.names().join(", ")
        ));
    }
    out.push_str("\nSummarize operators (case-insensitive, default SUM):\n  ");
    let kinds: Vec<&str> = SummarizeKind::ALL.iter().map(|k| k.name()).collect();
    out.push_str(&kinds.join(", "));
    out.push('\n');
    out
}

/// Handle the fields command.
pub fn handle() -> Result<()> {
    print!("{}", fields_listing());
    Ok(())
}
