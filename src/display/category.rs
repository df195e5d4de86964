//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Color")]
    color: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'budget init' to create default categories.\n"
            .to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        id: c.id.short().to_string(),
        name: c.name.clone(),
        kind: c.kind.to_string(),
        color: c.color.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;

    #[test]
    fn test_format_category_list() {
        let categories = vec![
            Category::new("Salary", "#96CEB4", CategoryType::Earning),
            Category::new("Groceries", "#4ECDC4", CategoryType::Expense),
        ];
        let output = format_category_list(&categories);
        assert!(output.contains("Salary"));
        assert!(output.contains("earning"));
        assert!(output.contains("#4ECDC4"));
    }

    #[test]
    fn test_empty_list_points_at_init() {
        assert!(format_category_list(&[]).contains("budget init"));
    }
}
