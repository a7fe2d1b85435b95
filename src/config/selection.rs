/// Which sheets a run should convert
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelector {
    /// Every sheet in the spreadsheet, ignoring `customIncludedSheets`
    All,
    /// Exactly one sheet, whether or not the metadata lists it
    Named(String),
    /// `customIncludedSheets` when configured, otherwise every sheet
    #[default]
    Configured,
}

/// Resolve the selected sheet titles, keeping spreadsheet order.
pub fn select_sheets(
    selector: &SheetSelector,
    all_titles: &[String],
    custom_included: Option<&[String]>,
) -> Vec<String> {
    match (selector, custom_included) {
        (SheetSelector::Named(name), _) => vec![name.clone()],
        (SheetSelector::Configured, Some(included)) => all_titles
            .iter()
            .filter(|title| included.contains(*title))
            .cloned()
            .collect(),
        _ => all_titles.to_vec(),
    }
}

/// Convert a 1-based column number to spreadsheet letters (1 → A, 27 → AA)
pub fn column_letter(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(b'A' + rem as u8);
        column = (column - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// A1 range covering the key column and one column per language, without the
/// header row
pub fn range_for(title: &str, language_count: usize) -> String {
    format!("{}!A2:{}", title, column_letter(language_count + 1))
}
