use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "refs.toml";

const DEFAULT_ROOT: &str = "references";

#[derive(Deserialize, Debug, Default)]
pub struct RefsConfig {
    pub fetcher: Option<FetcherConfig>,
    #[serde(default)]
    pub deps: BTreeMap<String, Dependency>,
}

#[derive(Deserialize, Debug, Default)]
pub struct FetcherConfig {
    pub root: Option<String>,
}

/// A dependency entry. The short form `name = "url"` clones only; the
/// detailed form adds staging rules and an optional compile rule.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Dependency {
    Simple(String),
    Detailed {
        git: String,
        #[serde(default = "default_enabled")]
        enabled: bool,
        /// Clone directory under the root. Defaults to the dependency name.
        dir: Option<String>,
        #[serde(default)]
        stage: Vec<StageRule>,
        build: Option<BuildRule>,
    },
}

/// Copy `src` (relative to the clone) to `dest` (relative to the root).
/// Directories copy recursively; the destination is replaced, never merged.
#[derive(Deserialize, Debug, Clone)]
pub struct StageRule {
    pub src: String,
    pub dest: String,
}

/// Compile `source` (relative to the clone) into `lib/<object>`.
/// Consumed only by `rf build`, never by `rf fetch`.
#[derive(Deserialize, Debug, Clone)]
pub struct BuildRule {
    pub source: String,
    pub object: String,
}

fn default_enabled() -> bool {
    true
}

impl RefsConfig {
    pub fn root(&self) -> &str {
        self.fetcher
            .as_ref()
            .and_then(|f| f.root.as_deref())
            .unwrap_or(DEFAULT_ROOT)
    }
}

impl Dependency {
    pub fn url(&self) -> &str {
        match self {
            Dependency::Simple(url) => url,
            Dependency::Detailed { git, .. } => git,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            Dependency::Simple(_) => true,
            Dependency::Detailed { enabled, .. } => *enabled,
        }
    }

    pub fn dir_name<'a>(&'a self, name: &'a str) -> &'a str {
        match self {
            Dependency::Simple(_) => name,
            Dependency::Detailed { dir, .. } => dir.as_deref().unwrap_or(name),
        }
    }

    pub fn stage(&self) -> &[StageRule] {
        match self {
            Dependency::Simple(_) => &[],
            Dependency::Detailed { stage, .. } => stage,
        }
    }

    pub fn build(&self) -> Option<&BuildRule> {
        match self {
            Dependency::Simple(_) => None,
            Dependency::Detailed { build, .. } => build.as_ref(),
        }
    }
}

pub fn load_config() -> Result<RefsConfig> {
    if !Path::new(CONFIG_FILE).exists() {
        return Err(anyhow::anyhow!(
            "{} not found in current directory.\n\n\
            💡 Tip: Run 'rf init' to create one.",
            CONFIG_FILE
        ));
    }
    let config_str = fs::read_to_string(CONFIG_FILE)
        .with_context(|| format!("Failed to read {} - check file permissions", CONFIG_FILE))?;

    let config: RefsConfig = toml::from_str(&config_str).with_context(|| {
        format!(
            "Failed to parse {} - check for syntax errors (missing quotes, brackets)",
            CONFIG_FILE
        )
    })?;

    Ok(config)
}

/// Starter configuration written by `rf init`: the JSON reference set,
/// with the C parser present but switched off.
pub const STARTER_CONFIG: &str = r#"[deps.nlohmann_json]
git = "https://github.com/nlohmann/json.git"
stage = [{ src = "include/nlohmann", dest = "include/nlohmann" }]

[deps.c_simple]
enabled = false
git = "https://github.com/whyisitworking/C-Simple-JSON-Parser.git"
dir = "C-Simple-JSON-Parser"
stage = [{ src = "json.h", dest = "include/c_simple/json.h" }]
build = { source = "json.c", object = "c_simple.o" }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_starter_config() {
        let config: RefsConfig = toml::from_str(STARTER_CONFIG).unwrap();
        assert_eq!(config.deps.len(), 2);

        let nlohmann = config.deps.get("nlohmann_json").unwrap();
        assert!(nlohmann.enabled());
        assert_eq!(nlohmann.url(), "https://github.com/nlohmann/json.git");
        assert_eq!(nlohmann.dir_name("nlohmann_json"), "nlohmann_json");
        assert_eq!(nlohmann.stage().len(), 1);
        assert_eq!(nlohmann.stage()[0].src, "include/nlohmann");

        let c_simple = config.deps.get("c_simple").unwrap();
        assert!(!c_simple.enabled());
        assert_eq!(c_simple.dir_name("c_simple"), "C-Simple-JSON-Parser");
        let build = c_simple.build().unwrap();
        assert_eq!(build.source, "json.c");
        assert_eq!(build.object, "c_simple.o");
    }

    #[test]
    fn test_parse_short_form() {
        let config: RefsConfig = toml::from_str(
            r#"
[deps]
fmt = "https://github.com/fmtlib/fmt.git"
"#,
        )
        .unwrap();
        let dep = config.deps.get("fmt").unwrap();
        assert!(dep.enabled());
        assert_eq!(dep.url(), "https://github.com/fmtlib/fmt.git");
        assert!(dep.stage().is_empty());
        assert!(dep.build().is_none());
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let config: RefsConfig = toml::from_str(
            r#"
[deps.json]
git = "https://github.com/nlohmann/json.git"
"#,
        )
        .unwrap();
        assert!(config.deps.get("json").unwrap().enabled());
    }

    #[test]
    fn test_root_default_and_override() {
        let config: RefsConfig = toml::from_str("").unwrap();
        assert_eq!(config.root(), "references");

        let config: RefsConfig = toml::from_str(
            r#"
[fetcher]
root = "ref"
"#,
        )
        .unwrap();
        assert_eq!(config.root(), "ref");
    }

    #[test]
    fn test_deps_iterate_in_name_order() {
        let config: RefsConfig = toml::from_str(
            r#"
[deps]
zlib = "https://github.com/madler/zlib.git"
abseil = "https://github.com/abseil/abseil-cpp.git"
"#,
        )
        .unwrap();
        let names: Vec<&String> = config.deps.keys().collect();
        assert_eq!(names, vec!["abseil", "zlib"]);
    }
}
