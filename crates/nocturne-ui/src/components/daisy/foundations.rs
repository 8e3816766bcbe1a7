/// Common sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisySize {
    #[default]
    Md,
    Lg,
}

impl DaisySize {
    /// Returns the suffix used by DaisyUI for the selected size.
    #[must_use]
    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Adds a prefix (e.g. `btn`) to the size suffix for class composition.
    #[must_use]
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}
