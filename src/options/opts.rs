//! The option accumulator threaded through argument parsing

use super::Flags;
use serde::Serialize;

/// Options collected before the mode token
///
/// Values are never mutated in place: every `with_*` method consumes the
/// current value and returns the updated one, so a half-built `Options`
/// can't be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    flags: Flags,
    repl_aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    classpath: Option<String>,
    threads: i32,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self {
            flags: Flags::empty(),
            repl_aliases: Vec::new(),
            deps: None,
            classpath: None,
            threads: 1,
        }
    }
}

impl Options {
    /// Create options with every field at its default
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `flag` into the flag set
    #[must_use]
    #[inline]
    pub fn with_flag(self, flag: Flags) -> Self {
        Self {
            flags: self.flags | flag,
            ..self
        }
    }

    /// Append an alias string given with `-A`
    #[must_use]
    #[inline]
    pub fn with_repl_alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.repl_aliases.push(alias.into());
        self
    }

    /// Set the `-Sdeps` override
    #[must_use]
    #[inline]
    pub fn with_deps<S: Into<String>>(self, deps: S) -> Self {
        Self {
            deps: Some(deps.into()),
            ..self
        }
    }

    /// Set the `-Scp` override
    #[must_use]
    #[inline]
    pub fn with_classpath<S: Into<String>>(self, classpath: S) -> Self {
        Self {
            classpath: Some(classpath.into()),
            ..self
        }
    }

    /// Set the `-Sthreads` count
    #[must_use]
    #[inline]
    pub fn with_threads(self, threads: i32) -> Self {
        Self { threads, ..self }
    }

    #[must_use]
    #[inline]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether every bit of `flag` is set
    #[must_use]
    #[inline]
    pub const fn has_flag(&self, flag: Flags) -> bool {
        self.flags.contains(flag)
    }

    /// Aliases from `-A`, in the order they were given
    #[must_use]
    #[inline]
    pub fn repl_aliases(&self) -> &[String] {
        &self.repl_aliases
    }

    #[must_use]
    #[inline]
    pub fn deps(&self) -> Option<&str> {
        self.deps.as_deref()
    }

    #[must_use]
    #[inline]
    pub fn classpath(&self) -> Option<&str> {
        self.classpath.as_deref()
    }

    #[must_use]
    #[inline]
    pub const fn threads(&self) -> i32 {
        self.threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::new();
        assert!(opts.flags().is_empty());
        assert!(opts.repl_aliases().is_empty());
        assert_eq!(opts.deps(), None);
        assert_eq!(opts.classpath(), None);
        assert_eq!(opts.threads(), 1);
    }

    #[test]
    fn flags_accumulate() {
        let opts = Options::new()
            .with_flag(Flags::FORCE)
            .with_flag(Flags::TREE)
            .with_flag(Flags::FORCE);

        assert_eq!(opts.flags(), Flags::FORCE | Flags::TREE);
        assert!(opts.has_flag(Flags::TREE));
        assert!(!opts.has_flag(Flags::PREP));
    }

    #[test]
    fn aliases_keep_encounter_order() {
        let opts = Options::new()
            .with_repl_alias(":C:D")
            .with_repl_alias(":A:B");
        assert_eq!(opts.repl_aliases(), [":C:D", ":A:B"]);
    }

    #[test]
    fn scalar_overrides_are_last_write_wins() {
        let opts = Options::new()
            .with_deps("{:deps {}}")
            .with_deps("ABC")
            .with_classpath("DEF")
            .with_threads(12);

        assert_eq!(opts.deps(), Some("ABC"));
        assert_eq!(opts.classpath(), Some("DEF"));
        assert_eq!(opts.threads(), 12);
    }

    #[test]
    fn updates_leave_other_fields_alone() {
        let base = Options::new().with_flag(Flags::REPRO).with_repl_alias(":x");
        let updated = base.clone().with_threads(4);

        assert_eq!(updated.flags(), base.flags());
        assert_eq!(updated.repl_aliases(), base.repl_aliases());
        assert_eq!(base.threads(), 1);
    }
}
