use std::fmt::{self, Debug, Display, Formatter};

/// Prints the contained string verbatim when debug formatted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Debug formats the items of a cloneable iterator as a list, so that it can be used as a field of
/// a [`DebugStruct`](fmt::DebugStruct).
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes the provided items in order, comma-separated and enclosed in brackets: `[a,b,c]`.
pub fn write_bracketed<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

/// Writes the provided entries as `{key: element, key: element}`.
pub fn write_entries<'a, K, E, I>(f: &mut Formatter<'_>, entries: I) -> fmt::Result
where
    K: Display + 'a,
    E: Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a E)>,
{
    write!(f, "{{")?;
    for (index, (key, element)) in entries.into_iter().enumerate() {
        if index != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{key}: {element}")?;
    }
    write!(f, "}}")
}
