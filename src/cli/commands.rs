// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands: `form` (the default), `predict` and
// `options`, plus the global flags that say where the two
// artifacts live.
//
// The From impls below are the boundary between Layer 1 and
// the rest of the crate: nothing past here sees clap types.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::domain::laptop::{LaptopSpec, YesNo, HDD_CHOICES, RAM_CHOICES, SSD_CHOICES};
use crate::infra::artifacts::{ArtifactConfig, DEFAULT_DATA_FILE, DEFAULT_MODEL_FILE};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive price form in the terminal
    Form,

    /// Estimate the price of one laptop described by flags
    Predict(PredictArgs),

    /// List the choices every form field accepts
    Options(OptionsArgs),
}

/// Where to find the fitted pipeline and the reference table.
#[derive(Args, Debug, Clone)]
pub struct ArtifactArgs {
    /// Directory holding both artifact files
    #[arg(long, global = true, default_value = ".")]
    pub artifacts_dir: PathBuf,

    /// File name of the fitted pipeline inside the artifacts directory
    #[arg(long, global = true, default_value = DEFAULT_MODEL_FILE)]
    pub model_file: String,

    /// File name of the reference table inside the artifacts directory
    #[arg(long, global = true, default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,
}

impl From<ArtifactArgs> for ArtifactConfig {
    fn from(a: ArtifactArgs) -> Self {
        ArtifactConfig {
            dir:        a.artifacts_dir,
            model_file: a.model_file,
            data_file:  a.data_file,
        }
    }
}

/// Yes/No flag value as typed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YesNoArg {
    #[default]
    No,
    Yes,
}

impl From<YesNoArg> for YesNo {
    fn from(a: YesNoArg) -> Self {
        match a {
            YesNoArg::No  => YesNo::No,
            YesNoArg::Yes => YesNo::Yes,
        }
    }
}

/// One flag per form control. Brand, type, CPU, GPU and OS are
/// checked against the reference table after it loads.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Manufacturer, e.g. Dell
    #[arg(long)]
    pub company: String,

    /// Form factor, e.g. Notebook
    #[arg(long = "type")]
    pub type_name: String,

    /// Memory in GB
    #[arg(long, value_parser = parse_ram)]
    pub ram: u32,

    /// Weight of the laptop in kg
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub weight: f64,

    #[arg(long, value_enum, default_value_t)]
    pub touchscreen: YesNoArg,

    #[arg(long, value_enum, default_value_t)]
    pub ips: YesNoArg,

    /// Screen diagonal in inches; must be greater than zero
    #[arg(long, allow_negative_numbers = true)]
    pub screen_size: f64,

    /// Screen resolution as <width>x<height>
    #[arg(long, default_value = "1920x1080")]
    pub resolution: String,

    /// CPU brand, e.g. Intel
    #[arg(long)]
    pub cpu: String,

    /// Hard disk capacity in GB
    #[arg(long, value_parser = parse_hdd, default_value = "0")]
    pub hdd: u32,

    /// Solid state capacity in GB
    #[arg(long, value_parser = parse_ssd, default_value = "0")]
    pub ssd: u32,

    /// GPU brand, e.g. Nvidia
    #[arg(long)]
    pub gpu: String,

    /// Operating system, e.g. Windows
    #[arg(long)]
    pub os: String,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&PredictArgs> for LaptopSpec {
    fn from(a: &PredictArgs) -> Self {
        LaptopSpec {
            company:     a.company.clone(),
            type_name:   a.type_name.clone(),
            ram:         a.ram,
            weight:      a.weight,
            touchscreen: a.touchscreen.into(),
            ips:         a.ips.into(),
            screen_size: a.screen_size,
            resolution:  a.resolution.clone(),
            cpu_brand:   a.cpu.clone(),
            hdd:         a.hdd,
            ssd:         a.ssd,
            gpu_brand:   a.gpu.clone(),
            os:          a.os.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Print the choices as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_ram(s: &str) -> Result<u32, String> {
    one_of(s, &RAM_CHOICES)
}

fn parse_hdd(s: &str) -> Result<u32, String> {
    one_of(s, &HDD_CHOICES)
}

fn parse_ssd(s: &str) -> Result<u32, String> {
    one_of(s, &SSD_CHOICES)
}

fn one_of(s: &str, choices: &[u32]) -> Result<u32, String> {
    let value: u32 = s.trim().parse().map_err(|_| format!("'{s}' is not a whole number"))?;
    if choices.contains(&value) {
        Ok(value)
    } else {
        let list: Vec<String> = choices.iter().map(u32::to_string).collect();
        Err(format!("expected one of: {}", list.join(", ")))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_fixed_choice_parsers() {
        assert_eq!(parse_ram("8"), Ok(8));
        assert!(parse_ram("10").unwrap_err().contains("2, 4, 6, 8"));
        assert_eq!(parse_hdd("1024"), Ok(1024));
        assert!(parse_ssd("abc").is_err());
    }

    #[test]
    fn test_predict_flags_map_to_spec() {
        let cli = Cli::try_parse_from([
            "laptop-price", "predict",
            "--company", "Dell", "--type", "Notebook", "--ram", "8",
            "--weight", "2.2", "--ips", "yes", "--screen-size", "15.6",
            "--cpu", "Intel", "--ssd", "256", "--gpu", "Intel", "--os", "Windows",
        ])
        .unwrap();

        let Some(Commands::Predict(args)) = &cli.command else {
            panic!("expected predict, got {:?}", cli.command);
        };
        let spec = LaptopSpec::from(args);
        assert_eq!(spec.ips, YesNo::Yes);
        assert_eq!(spec.touchscreen, YesNo::No);
        assert_eq!(spec.resolution, "1920x1080");
        assert_eq!(spec.hdd, 0);
        assert_eq!(spec.ssd, 256);
        assert_eq!(spec.cpu_brand, "Intel");
    }

    #[test]
    fn test_global_artifact_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "laptop-price", "options", "--json", "--artifacts-dir", "demo", "--model-file", "m.json",
        ])
        .unwrap();

        let config = ArtifactConfig::from(cli.artifacts.clone());
        assert_eq!(config.dir, PathBuf::from("demo"));
        assert_eq!(config.model_file, "m.json");
        assert_eq!(config.data_file, DEFAULT_DATA_FILE);
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["laptop-price"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_ram_outside_choices_is_rejected() {
        let parsed = Cli::try_parse_from([
            "laptop-price", "predict", "--company", "Dell", "--type", "Notebook",
            "--ram", "3", "--screen-size", "15.6", "--cpu", "Intel", "--gpu", "Intel", "--os", "Windows",
        ]);
        assert!(parsed.is_err());
    }
}
