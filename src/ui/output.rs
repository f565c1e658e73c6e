//! Output verbosity.

/// Output verbosity mode, picked from the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including repository details in listings.
    Verbose,
    /// Show listings, status messages, headers and hints.
    #[default]
    Normal,
    /// Show results and status only, no headers or hints.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global `--verbose` / `--quiet` flags.
    ///
    /// `--quiet` wins when both are set.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows extra detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers and hints.
    pub fn shows_decorations(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
