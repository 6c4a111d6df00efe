use crate::domain::model::DisplayLiteral;

/// Collapses every line break in `text` into a single space.
///
/// The two-character sequences are replaced before the lone characters so a
/// Windows-style `\r\n` becomes one space, not two. HTML-escaping status of
/// the input is not altered; the contract here is line-break removal only.
pub fn to_single_line_literal(text: &str) -> DisplayLiteral {
    let collapsed = text
        .replace("\r\n", " ")
        .replace("\n\r", " ")
        .replace('\r', " ")
        .replace('\n', " ");

    DisplayLiteral::from_normalized(collapsed)
}
