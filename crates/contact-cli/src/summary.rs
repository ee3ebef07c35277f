use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use contact_model::{FIRST_NAME_MIN_CHARS, Field, FieldErrors, SubmittedValues};

/// Heading printed above an accepted submission.
pub const SUBMITTED_HEADING: &str = "You Submitted:";

pub fn submission_table(submitted: &SubmittedValues) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        if let Some(value) = submitted.get(field) {
            table.add_row(vec![label_cell(field), Cell::new(value)]);
        }
    }
    table
}

pub fn fields_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Required"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        let required = if field.is_required() {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(field.key()),
            label_cell(field),
            required,
            Cell::new(rule_description(field)),
        ]);
    }
    table
}

/// One line per failing rule, in form order.
pub fn error_list(errors: &FieldErrors) -> String {
    let mut out = String::from("Errors:");
    for message in errors.messages() {
        out.push_str("\n- ");
        out.push_str(&message);
    }
    out
}

pub fn submission_json(submitted: &SubmittedValues) -> serde_json::Result<String> {
    serde_json::to_string_pretty(submitted)
}

/// `{"errors": {<field key>: <message>}}`
pub fn errors_json(errors: &FieldErrors) -> serde_json::Result<String> {
    let entries: serde_json::Map<String, serde_json::Value> = errors
        .iter()
        .map(|(field, error)| (field.key().to_string(), error.to_string().into()))
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "errors": entries }))
}

/// Human description of the rule applied to `field`.
pub fn rule_description(field: Field) -> String {
    match field {
        Field::FirstName => format!("at least {FIRST_NAME_MIN_CHARS} characters"),
        Field::LastName => "required".to_string(),
        Field::Email => "required, valid email address".to_string(),
        Field::Message => "none".to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(field: Field) -> Cell {
    Cell::new(field.label())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
