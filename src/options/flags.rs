//! Boolean command-line switches as a bit set

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Switches set by `-P` and the `-S` settings block.
    ///
    /// ```
    /// use cljr::options::Flags;
    ///
    /// let flags = Flags::FORCE | Flags::REPRO;
    /// assert!(flags.contains(Flags::FORCE));
    /// assert!(!flags.contains(Flags::TREE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    #[serde(transparent)]
    pub struct Flags: u16 {
        /// `-Sdescribe`: print environment and parsing info as data
        const DESCRIBE = 0b0_0000_0001;
        /// `-Sforce`: recompute the classpath, ignoring the cache
        const FORCE    = 0b0_0000_0010;
        /// `-Spath`: print the classpath only
        const PATH     = 0b0_0000_0100;
        /// `-Spom`: generate a pom.xml
        const POM      = 0b0_0000_1000;
        /// `-P`: prepare deps without executing
        const PREP     = 0b0_0001_0000;
        /// `-Srepro`: ignore the user deps.edn
        const REPRO    = 0b0_0010_0000;
        /// `-Strace`: write a deps expansion trace
        const TRACE    = 0b0_0100_0000;
        /// `-Stree`: print the dependency tree
        const TREE     = 0b0_1000_0000;
        /// `-Sverbose`: print path info
        const VERBOSE  = 0b1_0000_0000;
    }
}

impl Flags {
    /// Map an `-S` suffix to its switch, if it is one of the plain switches.
    ///
    /// `pom` is included; the caller is responsible for its warning.
    #[must_use]
    #[inline]
    pub fn from_setting(name: &str) -> Option<Self> {
        let flag = match name {
            "describe" => Self::DESCRIBE,
            "force" => Self::FORCE,
            "path" => Self::PATH,
            "pom" => Self::POM,
            "repro" => Self::REPRO,
            "trace" => Self::TRACE,
            "tree" => Self::TREE,
            "verbose" => Self::VERBOSE,
            _ => return None,
        };
        Some(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prep_has_no_setting_name() {
        assert_eq!(Flags::from_setting("prep"), None);
        assert_eq!(Flags::from_setting("deps"), None);
    }

    #[test]
    fn settings_cover_every_flag_but_prep() {
        let names = [
            "describe", "force", "path", "pom", "repro", "trace", "tree", "verbose",
        ];
        let union = names
            .iter()
            .filter_map(|name| Flags::from_setting(name))
            .fold(Flags::empty(), |acc, flag| acc | flag);

        assert_eq!(union | Flags::PREP, Flags::all());
        assert!(!union.contains(Flags::PREP));
    }
}
