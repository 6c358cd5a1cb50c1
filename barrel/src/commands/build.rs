use std::path::PathBuf;

use barrelgen_codegen::{BarrelOptions, DiscoveryOptions, FilterSpec};
use clap::Args;
use eyre::Result;
use regex::Regex;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// The path to write the barrel file to (empty prints it instead)
    #[arg(
        short = 'o',
        long = "outputPath",
        visible_alias = "output-path",
        default_value = "./barrel.js"
    )]
    pub output_path: String,

    /// The key representing a unique ID for each definition (empty exports an array)
    #[arg(
        short = 'i',
        long = "definitionKey",
        visible_alias = "definition-key",
        default_value = "id"
    )]
    pub definition_key: String,

    /// The path to the directory containing the meta definition files
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// The prefix to look for in each file name
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// The suffix to look for in each file name
    #[arg(short, long, default_value = "")]
    pub suffix: String,

    /// A regular expression to test each file name against (overrides prefix and suffix)
    #[arg(short = 'P', long)]
    pub pattern: Option<Regex>,

    /// Whether to search recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Fail when two files derive the same import name
    #[arg(long)]
    pub deny_duplicates: bool,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::build(self.options()).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Turn the parsed flags into generator options.
    pub fn options(&self) -> BarrelOptions {
        let filter = FilterSpec {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            pattern: self.pattern.clone(),
        };
        let discovery = DiscoveryOptions::new(&self.directory)
            .filter(filter)
            .recursive(self.recursive);

        let options = BarrelOptions::new(discovery)
            .output_path(&self.output_path)
            .deny_duplicates(self.deny_duplicates);

        if self.definition_key.is_empty() {
            options
        } else {
            options.definition_key(&self.definition_key)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        build: BuildCommand,
    }

    fn parse(args: &[&str]) -> BuildCommand {
        let argv = std::iter::once("build").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().build
    }

    #[test]
    fn test_defaults() {
        let options = parse(&[]).options();

        assert_eq!(options.output_path, Path::new("./barrel.js"));
        assert_eq!(options.definition_key.as_deref(), Some("id"));
        assert_eq!(options.discovery.directory, Path::new("."));
        assert!(!options.discovery.recursive);
        assert!(options.discovery.filter.pattern.is_none());
        assert!(options.discovery.filter.matches("anything.js"));
        assert!(!options.deny_duplicates);
    }

    #[test]
    fn test_short_flags() {
        let options = parse(&[
            "-o", "src/barrel.js", "-i", "name", "-d", "defs", "-p", "node", "-s", ".meta.js", "-r",
        ])
        .options();

        assert_eq!(options.output_path, Path::new("src/barrel.js"));
        assert_eq!(options.definition_key.as_deref(), Some("name"));
        assert_eq!(options.discovery.directory, Path::new("defs"));
        assert_eq!(options.discovery.filter.prefix, "node");
        assert_eq!(options.discovery.filter.suffix, ".meta.js");
        assert!(options.discovery.recursive);
    }

    #[test]
    fn test_camel_case_and_kebab_case_long_flags() {
        let camel = parse(&["--outputPath", "out.js", "--definitionKey", "key"]).options();
        let kebab = parse(&["--output-path", "out.js", "--definition-key", "key"]).options();

        assert_eq!(camel.output_path, kebab.output_path);
        assert_eq!(camel.definition_key, kebab.definition_key);
        assert_eq!(camel.definition_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_empty_values_select_array_and_stdout() {
        let options = parse(&["-o", "", "-i", ""]).options();

        assert!(options.output_path.as_os_str().is_empty());
        assert!(options.definition_key.is_none());
    }

    #[test]
    fn test_pattern_is_compiled() {
        let options = parse(&["-P", r"\.def\.js$", "-s", ".ts"]).options();

        assert!(options.discovery.filter.matches("button.def.js"));
        assert!(!options.discovery.filter.matches("button.ts"));
    }

    #[test]
    fn test_invalid_pattern_is_a_usage_error() {
        assert!(TestCli::try_parse_from(["build", "-P", "("]).is_err());
    }
}
