//! Person display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Person;

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
}

/// Format household members as a table
pub fn format_people_list(people: &[Person]) -> String {
    if people.is_empty() {
        return "No people found.\n".to_string();
    }

    let rows = people.iter().map(|p| PersonRow {
        id: p.id.short().to_string(),
        name: p.name.clone(),
        color: p.color.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_people_list() {
        let people = vec![Person::new("Alex", "#FF6B6B"), Person::new("Sam", "#4ECDC4")];
        let output = format_people_list(&people);
        assert!(output.contains("Alex"));
        assert!(output.contains("#4ECDC4"));
        assert_eq!(format_people_list(&[]), "No people found.\n");
    }
}
