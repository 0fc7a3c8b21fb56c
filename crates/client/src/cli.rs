//! Argument parsing and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hermetic_core::{
    HermeticError, ReferenceSequence, ReferenceTemplate, experience_cost, level_to_magnitude,
    magnitude_to_level,
};
use hermetic_runtime::{Designer, RuntimeConfig, RuntimeError};

use crate::dirs;

#[derive(Parser, Debug)]
#[command(name = "spell-designer")]
#[command(about = "Price art advancement and design Hermetic spell guidelines")]
pub struct Cli {
    /// Directory with designer.toml, arts.toml and guidelines.ron
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Do not register the default Hermetic techniques and forms
    #[arg(long, global = true, default_value_t = false)]
    pub no_default_arts: bool,

    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Experience needed to move a score from START to END (negative when lowering)
    Cost { start: i32, end: i32 },

    /// Magnitude of a level
    Magnitude {
        #[arg(allow_hyphen_values = true)]
        level: i16,
    },

    /// Level of a magnitude
    Level {
        #[arg(allow_hyphen_values = true)]
        magnitude: i16,
    },

    /// Render a description template, generically or at --level
    Render {
        template: String,
        #[arg(long)]
        level: Option<i16>,
    },

    /// List known arts by type
    Arts {
        /// Only arts of types with this name
        #[arg(long = "type")]
        type_name: Option<String>,
    },

    /// List the guidelines of a technique, form and level
    Guidelines {
        technique: String,
        form: String,
        #[arg(default_value = "Generic")]
        level: String,
    },

    /// Show one guideline by its position under the key
    Guideline {
        technique: String,
        form: String,
        level: String,
        index: String,
    },

    /// Create a guideline from a JSON body ({"name": .., "description": ..})
    Create {
        technique: String,
        form: String,
        level: String,
        body: String,
    },
}

impl Cli {
    /// Runs the command and returns its printable output.
    pub fn run(&self) -> Result<String> {
        match &self.command {
            Command::Cost { start, end } => Ok(experience_cost(*start, *end)?.to_string()),
            Command::Magnitude { level } => Ok(level_to_magnitude(*level).to_string()),
            Command::Level { magnitude } => Ok(magnitude_to_level(*magnitude)?.to_string()),
            Command::Render { template, level } => {
                Ok(ReferenceSequence::parse(template)?.render(*level)?)
            }
            Command::Arts { type_name } => list_arts(&self.designer()?, type_name.as_deref()),
            Command::Guidelines {
                technique,
                form,
                level,
            } => {
                let guidelines = self
                    .designer()?
                    .guidelines(technique, form, level)
                    .map_err(describe)?;
                Ok(guidelines
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::Guideline {
                technique,
                form,
                level,
                index,
            } => match self
                .designer()?
                .guideline(technique, form, level, index)
                .map_err(describe)?
            {
                Some(guideline) => Ok(guideline.to_string()),
                None => anyhow::bail!("No guideline {} under {}/{}/{}", index, technique, form, level),
            },
            Command::Create {
                technique,
                form,
                level,
                body,
            } => {
                let guideline = self
                    .designer()?
                    .create_guideline(technique, form, level, body)
                    .map_err(describe)?;
                Ok(guideline.to_string())
            }
        }
    }

    /// Builds the designer from the environment and command-line overrides.
    pub fn designer(&self) -> Result<Designer> {
        let mut config = RuntimeConfig::from_env();
        config.data_dir = dirs::resolve_data_dir(self.data_dir.clone(), config.data_dir);
        if self.no_default_arts {
            config.seed_default_arts = false;
        }
        tracing::debug!(
            data_dir = ?config.data_dir,
            seed_default_arts = config.seed_default_arts,
            "Building designer"
        );
        Designer::builder().config(config).build().map_err(describe)
    }
}

fn list_arts(designer: &Designer, type_name: Option<&str>) -> Result<String> {
    let arts = designer.arts();
    let mut lines = Vec::new();
    for art_type in arts.types().map_err(|e| describe(e.into()))? {
        if type_name.is_some_and(|name| name != art_type.name()) {
            continue;
        }
        let members = arts
            .arts_of_type(&art_type)
            .map_err(|e| describe(e.into()))?
            .iter()
            .map(|art| format!("{} ({})", art.name(), art.abbreviation()))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{} [{}, {}]: {}",
            art_type.name(),
            art_type.key(),
            art_type.category(),
            members
        ));
    }
    Ok(lines.join("\n"))
}

fn describe(error: RuntimeError) -> anyhow::Error {
    anyhow::anyhow!("{} ({}: {})", error, error.kind(), error.error_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["spell-designer", "--data-dir", "/nonexistent/spell-designer"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn prices_advancement() {
        assert_eq!(cli(&["cost", "0", "5"]).run().unwrap(), "15");
        assert_eq!(cli(&["cost", "5", "0"]).run().unwrap(), "-15");
        assert!(cli(&["cost", "0", "40000"]).run().is_err());
    }

    #[test]
    fn converts_magnitudes() {
        assert_eq!(cli(&["magnitude", "20"]).run().unwrap(), "4");
        assert_eq!(cli(&["level", "0"]).run().unwrap(), "4");
        assert_eq!(cli(&["level", "-1"]).run().unwrap(), "3");
    }

    #[test]
    fn renders_templates() {
        let rendered = cli(&["render", "Burns {level+1}", "--level", "10"]).run().unwrap();
        assert_eq!(rendered, "Burns 15");
        let generic = cli(&["render", "Burns {level-2}"]).run().unwrap();
        assert_eq!(generic, "Burns (level - 2)");
    }

    #[test]
    fn parses_guideline_commands() {
        let parsed = cli(&["guidelines", "Creo", "Ignem"]);
        assert_eq!(
            parsed.command,
            Command::Guidelines {
                technique: "Creo".into(),
                form: "Ignem".into(),
                level: "Generic".into(),
            }
        );
    }

    #[test]
    fn lists_default_arts() {
        let output = cli(&["arts", "--type", "Technique"]).run().unwrap();
        assert_eq!(
            output,
            "Technique [Hermetic, technique]: Creo (Cr), Intellego (In), Muto (Mu), Perdo (Pe), Rego (Re)"
        );
    }

    #[test]
    fn creates_guidelines_in_session() {
        let output = cli(&["create", "Creo", "Ignem", "10", r#"{"name": "Bonfire"}"#])
            .run()
            .unwrap();
        assert_eq!(output, "CrIg10: Bonfire.");
    }

    #[test]
    fn reports_error_codes() {
        let err = cli(&["create", "Creo", "Ignem", "10", "{}"]).run().unwrap_err();
        assert!(err.to_string().contains("RUNTIME_INVALID_BODY"));
        assert!(cli(&["guideline", "Creo", "Ignem", "10", "0"]).run().is_err());
    }

    #[test]
    fn loads_guidelines_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("guidelines.ron"),
            r#"(guidelines: [(technique: "Rego", form: "Vim", level: "5", name: "Ward")])"#,
        )
        .unwrap();
        let data_dir = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "spell-designer",
            "guideline",
            "Rego",
            "Vim",
            "5",
            "0",
            "--data-dir",
            data_dir,
        ])
        .unwrap();
        assert_eq!(cli.run().unwrap(), "ReVi5: Ward.");
    }
}
