//! Build-mode checks for development-only diagnostics.

/// The mode the crate was compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode of the current build (`debug_assertions` on means development).
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Run `f` only when the current build mode is `mode`.
pub fn check_env(mode: BuildMode, f: impl FnOnce()) {
    if BuildMode::current() == mode {
        f();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_env_runs_only_in_matching_mode() {
        let mut ran = Vec::new();
        check_env(BuildMode::Development, || ran.push(BuildMode::Development));
        check_env(BuildMode::Production, || ran.push(BuildMode::Production));
        assert_eq!(ran, vec![BuildMode::current()]);
    }
}
