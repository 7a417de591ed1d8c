use std::fmt::Write;

use crate::book::BookPatch;
use crate::editor::BookFields;

/// A single field change
#[derive(Debug, PartialEq)]
pub struct FieldChange {
    pub field: String,
    pub old_value: String,
    pub new_value: String,
}

/// Compute changes between two sets of book fields
pub fn compute_changes(old: &BookFields, new: &BookFields) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    fn check_string(
        changes: &mut Vec<FieldChange>,
        field: &str,
        old: &Option<String>,
        new: &Option<String>,
    ) {
        let old_val = old.as_deref().unwrap_or("");
        let new_val = new.as_deref().unwrap_or("");
        if old_val != new_val {
            changes.push(FieldChange {
                field: field.to_string(),
                old_value: if old_val.is_empty() {
                    "(empty)".to_string()
                } else {
                    old_val.to_string()
                },
                new_value: if new_val.is_empty() {
                    "(empty)".to_string()
                } else {
                    new_val.to_string()
                },
            });
        }
    }

    fn check_i32(
        changes: &mut Vec<FieldChange>,
        field: &str,
        old: &Option<i32>,
        new: &Option<i32>,
    ) {
        if old != new {
            changes.push(FieldChange {
                field: field.to_string(),
                old_value: old.map_or("(empty)".to_string(), |v| v.to_string()),
                new_value: new.map_or("(empty)".to_string(), |v| v.to_string()),
            });
        }
    }

    check_string(&mut changes, "title", &old.title, &new.title);
    check_string(&mut changes, "author", &old.author, &new.author);
    check_string(&mut changes, "genre", &old.genre, &new.genre);
    check_i32(
        &mut changes,
        "publication_year",
        &old.publication_year,
        &new.publication_year,
    );
    check_string(&mut changes, "isbn", &old.isbn, &new.isbn);
    check_string(&mut changes, "cover_image", &old.cover_image, &new.cover_image);
    check_string(
        &mut changes,
        "description",
        &old.description,
        &new.description,
    );

    changes
}

/// Build the outgoing patch from the edited fields: only changed fields are
/// set. A cleared optional field becomes an empty string, since a partial
/// update cannot express deletion.
pub fn patch_from(old: &BookFields, new: &BookFields) -> BookPatch {
    fn diff_string(old: &Option<String>, new: &Option<String>) -> Option<String> {
        let old_val = old.as_deref().unwrap_or("");
        let new_val = new.as_deref().unwrap_or("");
        if old_val != new_val {
            Some(new_val.to_string())
        } else {
            None
        }
    }

    BookPatch {
        title: diff_string(&old.title, &new.title),
        author: diff_string(&old.author, &new.author),
        genre: diff_string(&old.genre, &new.genre),
        publication_year: if old.publication_year != new.publication_year {
            new.publication_year
        } else {
            None
        },
        isbn: diff_string(&old.isbn, &new.isbn),
        cover_image: diff_string(&old.cover_image, &new.cover_image),
        description: diff_string(&old.description, &new.description),
    }
}

/// Format changes as a side-by-side diff table
pub fn format_diff(heading: &str, changes: &[FieldChange]) -> String {
    if changes.is_empty() {
        return "No changes detected.".to_string();
    }

    let mut output = String::new();

    writeln!(output, "Changes to {}:", heading).unwrap();
    writeln!(output).unwrap();

    // Calculate column widths
    let field_width = changes
        .iter()
        .map(|c| c.field.len())
        .max()
        .unwrap_or(10)
        .max(10);
    let value_width = 24;

    // Header
    writeln!(
        output,
        "  {:width$} | {:vw$} | {:vw$}",
        "Field",
        "Current",
        "New",
        width = field_width,
        vw = value_width
    )
    .unwrap();

    // Separator
    writeln!(
        output,
        " {:->width$}-+-{:->vw$}-+-{:->vw$}",
        "",
        "",
        "",
        width = field_width + 1,
        vw = value_width
    )
    .unwrap();

    // Changes
    for change in changes {
        let old_display = truncate_value(&change.old_value, value_width);
        let new_display = truncate_value(&change.new_value, value_width);

        writeln!(
            output,
            "  {:width$} | {:vw$} | {:vw$}",
            change.field,
            old_display,
            new_display,
            width = field_width,
            vw = value_width
        )
        .unwrap();
    }

    output
}

/// Truncate a value to fit in the column width
fn truncate_value(value: &str, max_width: usize) -> String {
    // Replace newlines with spaces for display
    let single_line = value.replace('\n', " ");

    let char_count = single_line.chars().count();

    if char_count <= max_width {
        single_line
    } else {
        let truncated: String = single_line.chars().take(max_width - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_changes_no_changes() {
        let old = BookFields::default();
        let new = BookFields::default();

        let changes = compute_changes(&old, &new);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_compute_changes_with_changes() {
        let old = BookFields {
            title: Some("Old Title".to_string()),
            author: Some("Author".to_string()),
            ..Default::default()
        };

        let new = BookFields {
            title: Some("New Title".to_string()),
            author: Some("Author".to_string()),
            description: Some("New description".to_string()),
            ..Default::default()
        };

        let changes = compute_changes(&old, &new);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].field, "title");
        assert_eq!(changes[0].old_value, "Old Title");
        assert_eq!(changes[0].new_value, "New Title");
        assert_eq!(changes[1].field, "description");
        assert_eq!(changes[1].old_value, "(empty)");
    }

    #[test]
    fn test_patch_contains_only_changed_fields() {
        let old = BookFields {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            genre: Some("Science Fiction".to_string()),
            publication_year: Some(1965),
            isbn: Some("978-0441013593".to_string()),
            ..Default::default()
        };
        let mut new = old.clone();
        new.title = Some("Dune Messiah".to_string());
        new.publication_year = Some(1969);

        let patch = patch_from(&old, &new);
        assert_eq!(patch.title.as_deref(), Some("Dune Messiah"));
        assert_eq!(patch.publication_year, Some(1969));
        assert!(patch.author.is_none());
        assert!(patch.genre.is_none());
        assert!(patch.isbn.is_none());
    }

    #[test]
    fn test_cleared_optional_field_becomes_empty_string() {
        let old = BookFields {
            description: Some("Spice".to_string()),
            ..Default::default()
        };
        let new = BookFields::default();

        let patch = patch_from(&old, &new);
        assert_eq!(patch.description.as_deref(), Some(""));
    }

    #[test]
    fn test_identical_fields_make_an_empty_patch() {
        let fields = BookFields {
            title: Some("Dune".to_string()),
            ..Default::default()
        };
        assert_eq!(patch_from(&fields, &fields.clone()), BookPatch::default());
    }

    #[test]
    fn test_format_diff_alignment() {
        let changes = vec![FieldChange {
            field: "title".to_string(),
            old_value: "Old".to_string(),
            new_value: "New".to_string(),
        }];

        let output = format_diff("Dune", &changes);
        assert!(output.contains("Changes to Dune:"));
        assert!(output.contains("Field"));
        assert!(output.contains("Current"));
        assert!(output.contains("| New"));
    }

    #[test]
    fn test_truncate_long_values() {
        let truncated = truncate_value(&"x".repeat(40), 24);
        assert_eq!(truncated.chars().count(), 24);
        assert!(truncated.ends_with("..."));
    }
}
