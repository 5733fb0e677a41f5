use super::{Document, ElementId, Region};
use maud::{DOCTYPE, Markup, html};

const COLUMNS: [&str; 5] = ["ID", "Name", "Age", "Grade", "Email"];

/// Full page markup. Every field goes through maud's escaping, so student
/// data can never inject markup.
pub fn render(doc: &Document) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Students" }
            }
            body {
                (status_region(doc, Region::List))
                (student_table(doc))
                (add_form(doc))
                (status_region(doc, Region::Add))
            }
        }
    }
}

pub fn student_table(doc: &Document) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for title in COLUMNS {
                        th { (title) }
                    }
                }
            }
            tbody id=(ElementId::TableBody.as_str()) {
                @for row in doc.rows() {
                    tr {
                        @for cell in &row.cells {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}

fn status_region(doc: &Document, region: Region) -> Markup {
    let status = doc.status(region);
    html! {
        div id=(region.element().as_str()) class=[status.map(|s| s.kind.class_name())] {
            @if let Some(status) = status {
                (status.text)
            }
        }
    }
}

fn add_form(doc: &Document) -> Markup {
    html! {
        form {
            @for id in ElementId::INPUTS {
                input id=(id.as_str()) name=(id.as_str()) value=(doc.input_value(id).unwrap_or_default());
            }
        }
    }
}
