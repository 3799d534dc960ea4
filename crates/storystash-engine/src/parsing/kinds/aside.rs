/// Out-of-character aside: `((brb, pizza))`.
///
/// All aside delimiter knowledge lives here, not in the classifier.
pub struct Aside;

impl Aside {
    pub const OPEN: &'static str = "((";
    pub const CLOSE: &'static str = "))";

    /// Returns the inner text of an aside line, or `None` if `trimmed` is not one.
    ///
    /// Every leading and trailing paren and space is stripped, so
    /// `(( table flip ))` yields `table flip`.
    pub fn inner(trimmed: &str) -> Option<&str> {
        if trimmed.starts_with(Self::OPEN) && trimmed.ends_with(Self::CLOSE) {
            Some(trimmed.trim_matches(|c| matches!(c, '(' | ')' | ' ')))
        } else {
            None
        }
    }
}
