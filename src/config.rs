use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

/// Completion line the generated design prints before `$finish`
pub const COMPLETION_MARKER: &str = "*-* All Finished *-*";

/// Members per emitted struct before Verilator splits it
pub const DEFAULT_MEMBER_LIMIT: usize = 50;

/// Large enough to trip the member limit well over 50 times
pub const DEFAULT_CHAIN_LENGTH: usize = 6000;

/// Anonymous struct declaration in the root class header
pub const DEFAULT_PATTERN: &str = r"struct \{";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VerilatorConfig {
    /// Verilator executable, looked up on PATH when not absolute
    pub binary: String,

    /// Flags forwarded verbatim; each entry is split on whitespace
    pub flags: Vec<String>,
}

impl Default for VerilatorConfig {
    fn default() -> Self {
        VerilatorConfig {
            binary: "verilator".to_string(),
            flags: vec![
                "-x-assign fast --x-initial fast".to_string(),
                "-Wno-UNOPTTHREADS".to_string(),
                // V3Partition self-checks are far too slow on a design this size
                "--no-debug-partition".to_string(),
            ],
        }
    }
}

/// Configuration for a probe run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Number of shift stages in the generated design
    pub chain_length: usize,

    /// Expected per-struct member limit of the compiler under test
    pub member_limit: usize,

    /// Regex searched for in the root class header
    pub pattern: String,

    /// Minimum number of matching lines for a satisfied check
    pub min_matches: usize,

    pub top_module: String,
    pub vm_prefix: String,

    /// File name of the generated design inside `obj_dir`
    pub source_name: String,

    pub obj_dir: PathBuf,

    pub completion_marker: String,

    pub verilator: VerilatorConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            chain_length: DEFAULT_CHAIN_LENGTH,
            member_limit: DEFAULT_MEMBER_LIMIT,
            pattern: DEFAULT_PATTERN.to_string(),
            min_matches: 1,
            top_module: "t".to_string(),
            vm_prefix: "Vt".to_string(),
            source_name: "t_emit_memb_limit.v".to_string(),
            obj_dir: PathBuf::from("obj_dir"),
            completion_marker: COMPLETION_MARKER.to_string(),
            verilator: VerilatorConfig::default(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ProbeConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply `MEMBPROBE_*` environment variables on top of the loaded values
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        use log::debug;

        if let Ok(binary) = std::env::var("MEMBPROBE_VERILATOR") {
            debug!("Using verilator binary from environment: {}", binary);
            self.verilator.binary = binary;
        }

        if let Ok(dir) = std::env::var("MEMBPROBE_OBJ_DIR") {
            debug!("Using object directory from environment: {}", dir);
            self.obj_dir = PathBuf::from(dir);
        }

        if let Ok(length) = std::env::var("MEMBPROBE_CHAIN_LENGTH") {
            self.chain_length = length.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "MEMBPROBE_CHAIN_LENGTH".to_string(),
                reason: format!("'{}' is not a positive integer", length),
            })?;
        }

        Ok(())
    }

    /// Check the values a probe run depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_length == 0 {
            return Err(invalid("chain_length", "must be at least 1"));
        }
        if self.member_limit == 0 {
            return Err(invalid("member_limit", "must be at least 1"));
        }
        if self.pattern.trim().is_empty() {
            return Err(invalid("pattern", "must not be empty"));
        }
        if self.min_matches == 0 {
            return Err(invalid("min_matches", "must be at least 1"));
        }
        if self.vm_prefix.is_empty() {
            return Err(invalid("vm_prefix", "must not be empty"));
        }
        Ok(())
    }

    /// Path the generated design is written to
    pub fn source_path(&self) -> PathBuf {
        self.obj_dir.join(&self.source_name)
    }

    /// Number of times the member limit should trip for the configured chain
    pub fn expected_splits(&self) -> usize {
        // 3 boundary signals plus r0..=rN
        (self.chain_length + 4) / self.member_limit.max(1)
    }

    /// Serialize to YAML, as shown by `membprobe config`
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue { key: key.to_string(), reason: reason.to_string() }
}
