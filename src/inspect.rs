//! `"#PersistentVector<count: N, [e0, e1, ...]>"` formatting. `fmt::Debug`
//! shows every element; [`crate::PersistentVector::inspect_limited`] takes
//! an explicit cap and truncates with a trailing `...`.

use std::fmt;

use crate::vector::PersistentVector;

pub(crate) fn write_inspect<T: fmt::Debug>(
    v: &PersistentVector<T>,
    f: &mut fmt::Formatter<'_>,
    limit: usize,
) -> fmt::Result {
    write!(f, "#PersistentVector<count: {}, [", v.len())?;
    for (i, value) in v.iter().enumerate() {
        if i == limit {
            write!(f, ", ...")?;
            break;
        }
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:?}", value)?;
    }
    write!(f, "]>")
}

pub(crate) fn format_limited<T: fmt::Debug>(v: &PersistentVector<T>, limit: usize) -> String {
    struct Limited<'a, T>(&'a PersistentVector<T>, usize);
    impl<'a, T: fmt::Debug> fmt::Display for Limited<'a, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_inspect(self.0, f, self.1)
        }
    }
    Limited(v, limit).to_string()
}
