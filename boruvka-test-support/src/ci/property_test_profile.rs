//! Property-test run profile parsing for CI and local overrides.
//!
//! Property suites across the workspace share one interpretation of the
//! environment so a CI job can scale every suite with a single variable.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const BORUVKA_PBT_FORK_ENV_KEY: &str = "BORUVKA_PBT_FORK";
/// Environment variable controlling how often determinism properties re-run
/// the engine on the same input.
pub const BORUVKA_MST_PBT_REPEATS_ENV_KEY: &str = "BORUVKA_MST_PBT_REPEATS";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    repeats: u32,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged and replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use boruvka_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.repeats() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let cases = read_env_or_default(PROGTEST_CASES_ENV_KEY, default_cases, parse_positive);
        let fork = read_env_or_default(BORUVKA_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        let repeats = read_env_or_default(
            BORUVKA_MST_PBT_REPEATS_ENV_KEY,
            DEFAULT_REPEATS,
            parse_positive,
        );
        Self {
            cases,
            fork,
            repeats,
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Number of times a determinism property repeats a computation.
    #[must_use]
    pub const fn repeats(&self) -> u32 {
        self.repeats
    }
}

const DEFAULT_REPEATS: u32 = 5;

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("value must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
