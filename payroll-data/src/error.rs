/// The two fatal failure classes a payroll run distinguishes, plus output
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or unreadable input: bad arguments, files that cannot be
    /// read, values that do not parse, values outside their valid range.
    Parameter,

    /// A required configuration entry is absent or the tax table is unusable.
    Config,

    /// The results could not be written.
    Io,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parameter => "Parameter Error",
            Self::Config => "Config Error",
            Self::Io => "Output Error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
