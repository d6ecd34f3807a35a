use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::runner;

/// Global + per-project configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Java executable used for the jar-based engines.
    pub java_bin: String,
    /// Path to the Google Closure Compiler jar.
    pub gcc_jar: String,
    /// Path to the legacy Closure Compiler jar (pre-Java-7 runtimes).
    pub gcc_legacy_jar: String,
    /// Path to the YUI Compressor jar.
    pub yui_jar: String,
    /// terser CLI executable.
    pub terser_bin: String,
    /// uglify-js CLI executable.
    pub uglify_bin: String,
    /// clean-css CLI executable.
    pub cleancss_bin: String,
    /// Print raw/gzip size reports around each run.
    pub show_sizes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            java_bin: "java".into(),
            gcc_jar: "closure-compiler.jar".into(),
            gcc_legacy_jar: "closure-compiler-legacy.jar".into(),
            yui_jar: "yuicompressor.jar".into(),
            terser_bin: "terser".into(),
            uglify_bin: "uglifyjs".into(),
            cleancss_bin: "cleancss".into(),
            show_sizes: true,
        }
    }
}

impl Config {
    /// Load config with priority: .mx.toml (project) > ~/.config/mx/config.toml (global) > defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        // 1. Global config
        if let Some(path) = global_config_path()
            && let Some(global) = load_file(&path)
        {
            config = merge(config, global);
        }

        // 2. Project config (overrides global)
        if let Some(project) = load_file(Path::new(".mx.toml")) {
            config = merge(config, project);
        }

        config
    }

    /// Generate a default config file content.
    pub fn default_toml() -> &'static str {
        r#"# mx-minify configuration
# Place in ~/.config/mx/config.toml (global) or .mx.toml (per-project)

# Java runtime and the jar-based engines
java_bin = "java"
gcc_jar = "closure-compiler.jar"
gcc_legacy_jar = "closure-compiler-legacy.jar"
yui_jar = "yuicompressor.jar"

# Node-based minifier CLIs
terser_bin = "terser"
uglify_bin = "uglifyjs"
cleancss_bin = "cleancss"

# Print raw/gzip size reports around each run
show_sizes = true
"#
    }
}

/// Partial config for TOML deserialization (all fields optional).
#[derive(Debug, Deserialize)]
struct PartialConfig {
    java_bin: Option<String>,
    gcc_jar: Option<String>,
    gcc_legacy_jar: Option<String>,
    yui_jar: Option<String>,
    terser_bin: Option<String>,
    uglify_bin: Option<String>,
    cleancss_bin: Option<String>,
    show_sizes: Option<bool>,
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mx").join("config.toml"))
}

fn load_file(path: &Path) -> Option<PartialConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

fn merge(base: Config, partial: PartialConfig) -> Config {
    Config {
        java_bin: partial.java_bin.unwrap_or(base.java_bin),
        gcc_jar: partial.gcc_jar.unwrap_or(base.gcc_jar),
        gcc_legacy_jar: partial.gcc_legacy_jar.unwrap_or(base.gcc_legacy_jar),
        yui_jar: partial.yui_jar.unwrap_or(base.yui_jar),
        terser_bin: partial.terser_bin.unwrap_or(base.terser_bin),
        uglify_bin: partial.uglify_bin.unwrap_or(base.uglify_bin),
        cleancss_bin: partial.cleancss_bin.unwrap_or(base.cleancss_bin),
        show_sizes: partial.show_sizes.unwrap_or(base.show_sizes),
    }
}

/// A runtime that answered a version probe on this machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Runtime {
    pub name: &'static str,
    pub version: String,
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}

/// Probe the external runtimes the engines depend on. A runtime is listed
/// only when its binary answers a `--version` call with exit 0.
pub fn detect_runtimes(cfg: &Config) -> Vec<Runtime> {
    let mut found = Vec::new();

    // java prints its version banner on stderr.
    if let Some(version) = probe(&cfg.java_bin, "-version") {
        found.push(Runtime {
            name: "java",
            version,
        });
    }
    if let Some(version) = probe("node", "--version") {
        found.push(Runtime {
            name: "node",
            version,
        });
    }

    found
}

fn probe(bin: &str, flag: &str) -> Option<String> {
    let result = runner::exec(bin, &[flag.to_string()]).ok()?;
    if !result.success() {
        return None;
    }
    let text = if result.stdout.trim().is_empty() {
        result.stderr
    } else {
        result.stdout
    };
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.java_bin, "java");
        assert_eq!(config.terser_bin, "terser");
        assert!(config.show_sizes);
        assert!(config.gcc_jar.ends_with(".jar"));
    }

    #[test]
    fn test_merge_partial() {
        let base = Config::default();
        let partial = PartialConfig {
            java_bin: Some("/opt/jdk/bin/java".into()),
            gcc_jar: None,
            gcc_legacy_jar: None,
            yui_jar: None,
            terser_bin: None,
            uglify_bin: None,
            cleancss_bin: None,
            show_sizes: Some(false),
        };
        let merged = merge(base, partial);
        assert_eq!(merged.java_bin, "/opt/jdk/bin/java");
        assert_eq!(merged.gcc_jar, "closure-compiler.jar"); // kept default
        assert!(!merged.show_sizes);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
gcc_jar = "/opt/closure/compiler.jar"
show_sizes = false
"#;
        let partial: PartialConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(partial.gcc_jar, Some("/opt/closure/compiler.jar".into()));
        assert_eq!(partial.show_sizes, Some(false));
        assert!(partial.java_bin.is_none());
    }

    #[test]
    fn test_default_toml_is_valid() {
        let toml_str = Config::default_toml();
        let result: Result<PartialConfig, _> = toml::from_str(toml_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_probe_missing_binary() {
        assert!(probe("mx-no-such-runtime", "--version").is_none());
    }
}
