// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for ophis.
//!
//! This module holds the spelling preferences and the output style used
//! by the command-line front end. Files are YAML unless they end in
//! `.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{Notation, Preference};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TheoryConfig {
    #[serde(default)]
    pub spelling: SpellingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl TheoryConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        parsed.with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}

/// Accidental preferences for each kind of respelling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpellingConfig {
    /// Preference when raising by half-steps
    #[serde(default = "default_augment")]
    pub augment: Preference,
    /// Preference when lowering by half-steps
    #[serde(default = "default_diminish")]
    pub diminish: Preference,
    /// Preference for enharmonic and chromatic reduction
    #[serde(default)]
    pub reduce: Preference,
}

fn default_augment() -> Preference {
    Preference::Sharp
}
fn default_diminish() -> Preference {
    Preference::Flat
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            augment: default_augment(),
            diminish: default_diminish(),
            reduce: Preference::Contextual,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub style: DisplayStyle,
}

/// How names are rendered on output
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    Ascii,
    #[default]
    Unicode,
    Verbose,
    Lilypond,
}

impl DisplayStyle {
    pub fn render<N: Notation + ?Sized>(self, item: &N) -> String {
        match self {
            DisplayStyle::Ascii => item.ascii(),
            DisplayStyle::Unicode => item.unicode(),
            DisplayStyle::Verbose => item.verbose(),
            DisplayStyle::Lilypond => item.lilypond(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::chroma::{DSHARP, EFLAT};
    use crate::music::interval::MAJOR_THIRD;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = TheoryConfig::default();
        assert_eq!(config.spelling.augment, Preference::Sharp);
        assert_eq!(config.spelling.diminish, Preference::Flat);
        assert_eq!(config.spelling.reduce, Preference::Contextual);
        assert_eq!(config.display.style, DisplayStyle::Unicode);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
spelling:
  augment: flat
  reduce: sharp
display:
  style: lilypond
"#;

        let config = TheoryConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.spelling.augment, Preference::Flat);
        assert_eq!(config.spelling.diminish, Preference::Flat);
        assert_eq!(config.spelling.reduce, Preference::Sharp);
        assert_eq!(config.display.style, DisplayStyle::Lilypond);
    }

    #[test]
    fn test_parse_empty_yaml_uses_defaults() {
        let config = TheoryConfig::from_yaml("{}").unwrap();
        assert_eq!(config, TheoryConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
[spelling]
diminish = "sharp"

[display]
style = "verbose"
"#;

        let config = TheoryConfig::from_toml(text).unwrap();
        assert_eq!(config.spelling.augment, Preference::Sharp);
        assert_eq!(config.spelling.diminish, Preference::Sharp);
        assert_eq!(config.display.style, DisplayStyle::Verbose);
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(TheoryConfig::from_yaml("display:\n  style: braille\n").is_err());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("ophis.yaml");
        fs::write(&yaml_path, "display:\n  style: ascii\n").unwrap();
        let config = TheoryConfig::load(&yaml_path).unwrap();
        assert_eq!(config.display.style, DisplayStyle::Ascii);

        let toml_path = dir.path().join("ophis.toml");
        fs::write(&toml_path, "[spelling]\nreduce = \"flat\"\n").unwrap();
        let config = TheoryConfig::load(&toml_path).unwrap();
        assert_eq!(config.spelling.reduce, Preference::Flat);

        assert!(TheoryConfig::load(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.yaml");

        let mut config = TheoryConfig::default();
        config.spelling.reduce = Preference::Flat;
        config.display.style = DisplayStyle::Verbose;
        config.save(&path).unwrap();

        assert_eq!(TheoryConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_render_styles() {
        assert_eq!(DisplayStyle::Ascii.render(&DSHARP), "D#");
        assert_eq!(DisplayStyle::Unicode.render(&EFLAT), "E\u{266D}");
        assert_eq!(DisplayStyle::Verbose.render(&DSHARP), "D SHARP");
        assert_eq!(DisplayStyle::Lilypond.render(&EFLAT), "ees");
        assert_eq!(DisplayStyle::Verbose.render(&MAJOR_THIRD), "major third");
    }
}
