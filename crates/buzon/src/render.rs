//! HTML rendering of the received messages.
//!
//! Rendering goes through askama templates under `templates/`, which
//! HTML-escape every interpolated value. A subject containing markup is
//! shown as text.

use askama::Template;

use crate::Result;
use crate::config::DateFormat;
use crate::message::Message;

/// Id of the element that receives the messages table.
pub const CONTAINER_ID: &str = "respuestaDelServidor";

const PAGE_TITLE: &str = "Mensajes recibidos";

struct Row<'a> {
    id: i64,
    subject: &'a str,
    sent_at: String,
}

#[derive(Template)]
#[template(path = "messages_table.html")]
struct MessagesTable<'a> {
    rows: Vec<Row<'a>>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageDocument<'a> {
    title: &'a str,
    container_id: &'a str,
    fragment: &'a str,
}

/// Render messages as an HTML table fragment.
///
/// Rows keep the order of `messages`. An empty slice gives a table with
/// the header row and an empty body.
pub fn messages_table(messages: &[Message], format: &DateFormat) -> Result<String> {
    let rows = messages
        .iter()
        .map(|m| Row {
            id: m.id,
            subject: &m.subject,
            sent_at: format.format_millis(m.sent_at),
        })
        .collect();

    Ok(MessagesTable { rows }.render()?)
}

/// Wrap a fragment from [`messages_table`] in a standalone HTML document.
///
/// The fragment is inserted as-is inside the `respuestaDelServidor`
/// container.
pub fn page_document(fragment: &str) -> Result<String> {
    let page = PageDocument {
        title: PAGE_TITLE,
        container_id: CONTAINER_ID,
        fragment,
    };
    Ok(page.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Zone;

    fn iso() -> DateFormat {
        DateFormat::new(Zone::Utc, "%Y-%m-%d", "%H:%M:%S").unwrap()
    }

    fn message(id: i64, subject: &str, sent_at: i64) -> Message {
        Message {
            id,
            subject: subject.to_string(),
            sent_at,
        }
    }

    #[test]
    fn empty_list_renders_headers_and_empty_body() {
        let html = messages_table(&[], &iso()).unwrap();
        assert!(html.contains("<th>Id</th><th>Asunto</th><th>Fecha</th>"));
        assert!(html.contains("<tbody></tbody>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn single_message_renders_one_row() {
        let html = messages_table(&[message(1, "Hi", 0)], &iso()).unwrap();
        assert_eq!(html.matches("<tr><td>").count(), 1);
        assert!(html.contains("<tr><td>1</td><td>Hi</td><td>1970-01-01 00:00:00</td></tr>"));
    }

    #[test]
    fn rows_keep_input_order() {
        let messages = [
            message(30, "tercero", 3_000),
            message(10, "primero", 1_000),
            message(20, "segundo", 2_000),
        ];
        let html = messages_table(&messages, &iso()).unwrap();

        let a = html.find("<td>30</td>").unwrap();
        let b = html.find("<td>10</td>").unwrap();
        let c = html.find("<td>20</td>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn subject_markup_is_escaped() {
        let html = messages_table(&[message(1, "<script>alert(1)</script> & co", 0)], &iso())
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("</script>"));
        assert!(html.contains("<td>&#60;script&#62;alert(1)&#60;/script&#62; &#38; co</td>"));
    }

    #[test]
    fn table_keeps_bootstrap_classes() {
        let html = messages_table(&[], &iso()).unwrap();
        assert!(html.starts_with("<table class=\"table table-bordered table-striped\">"));
    }

    #[test]
    fn page_wraps_fragment_in_container() {
        let fragment = messages_table(&[message(1, "Hi", 0)], &iso()).unwrap();
        let page = page_document(&fragment).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(&format!("<div id=\"{CONTAINER_ID}\">{fragment}</div>")));
    }
}
