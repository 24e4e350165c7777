pub mod memory;
pub mod order;
pub mod order_item;

/// Turns a free-text search term into an `ILIKE ... ESCAPE '\'` pattern that
/// matches the term literally anywhere in the column.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
