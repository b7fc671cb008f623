//! Command-line interface definitions.
//!
//! The flag surface mirrors what the wrapper has always offered: `--play` to
//! start playback right away and a mutually exclusive set of verbosity
//! switches. Version and help output are handled by clap before the player
//! process is ever touched.

use clap::Parser;

/// Command-line arguments for the bridge.
#[derive(Parser, Debug)]
#[command(
    name = "radiotray-ng-mpris",
    version,
    about = "A wrapper for Radiotray-NG which provides an MPRIS2 interface"
)]
pub struct Args {
    /// Start playback immediately
    #[arg(short, long)]
    pub play: bool,

    #[command(flatten)]
    verbosity: VerbosityArgs,
}

impl Args {
    /// The verbosity level selected on the command line.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity.level()
    }
}

/// Mutually exclusive verbosity switches.
///
/// clap rejects combinations of these with a non-zero exit before the
/// bridge starts. With no switch given the level defaults to [`Verbosity::Warn`].
#[derive(clap::Args, Debug, Default)]
#[group(multiple = false)]
pub struct VerbosityArgs {
    /// Be quiet
    #[arg(short, long)]
    quiet: bool,

    /// Print error messages
    #[arg(long)]
    error: bool,

    /// Print warning and error messages (default)
    #[arg(long)]
    warn: bool,

    /// Be verbose
    #[arg(short, long)]
    verbose: bool,

    /// Print debug messages
    #[arg(long)]
    debug: bool,
}

impl VerbosityArgs {
    fn level(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.error {
            Verbosity::Error
        } else if self.verbose {
            Verbosity::Verbose
        } else if self.debug {
            Verbosity::Debug
        } else {
            Verbosity::Warn
        }
    }
}

/// Logging verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Suppress all output
    Quiet,

    /// Errors only
    Error,

    /// Warnings and errors (the default)
    Warn,

    /// Informational messages
    Verbose,

    /// Full debug output
    Debug,
}

impl Verbosity {
    /// The `tracing_subscriber` filter directive for this level.
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn defaults_to_warn_verbosity() {
        let args = Args::try_parse_from(["radiotray-ng-mpris"]).unwrap();
        assert!(!args.play);
        assert_eq!(args.verbosity(), Verbosity::Warn);
    }

    #[test]
    fn play_flag_short_and_long() {
        let args = Args::try_parse_from(["radiotray-ng-mpris", "-p"]).unwrap();
        assert!(args.play);

        let args = Args::try_parse_from(["radiotray-ng-mpris", "--play"]).unwrap();
        assert!(args.play);
    }

    #[test]
    fn each_verbosity_switch_maps_to_its_level() {
        let cases = [
            ("-q", Verbosity::Quiet),
            ("--quiet", Verbosity::Quiet),
            ("--error", Verbosity::Error),
            ("--warn", Verbosity::Warn),
            ("-v", Verbosity::Verbose),
            ("--verbose", Verbosity::Verbose),
            ("--debug", Verbosity::Debug),
        ];
        for (flag, expected) in cases {
            let args = Args::try_parse_from(["radiotray-ng-mpris", flag]).unwrap();
            assert_eq!(args.verbosity(), expected, "flag {flag}");
        }
    }

    #[test]
    fn conflicting_verbosity_switches_are_rejected() {
        let err = Args::try_parse_from(["radiotray-ng-mpris", "-q", "--debug"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = Args::try_parse_from(["radiotray-ng-mpris", "--error", "--warn"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn version_flag_is_handled_by_clap() {
        let err = Args::try_parse_from(["radiotray-ng-mpris", "-V"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn filter_directives() {
        assert_eq!(Verbosity::Quiet.as_filter(), "off");
        assert_eq!(Verbosity::Error.as_filter(), "error");
        assert_eq!(Verbosity::Warn.as_filter(), "warn");
        assert_eq!(Verbosity::Verbose.as_filter(), "info");
        assert_eq!(Verbosity::Debug.as_filter(), "debug");
    }
}
