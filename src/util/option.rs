pub(crate) trait OptionExtension<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the None branch. Use it
    /// where an internal invariant of a collection rules None out, so that a broken invariant
    /// reads as a bug in the collection rather than a caller error.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("collection invariant violated"),
        }
    }
}
