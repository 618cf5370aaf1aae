// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// Every command first loads both artifacts; a missing or
// unusable artifact ends the program before any input is
// taken. All prediction work is delegated to Layer 2.
//
// Three commands are supported:
//   1. `form`    — interactive terminal form (the default)
//   2. `predict` — one estimate from command-line flags
//   3. `options` — print the choices each field accepts

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ArtifactArgs, Commands, OptionsArgs, PredictArgs};

use crate::application::form_options::FormOptions;
use crate::application::predict_use_case::{PredictUseCase, PredictionOutcome};
use crate::domain::laptop::LaptopSpec;
use crate::domain::price::{PriceEstimate, CURRENCY};
use crate::domain::traits::PricePipeline;
use crate::infra::artifacts::ArtifactStore;
use crate::ui::form::Field;

#[derive(Parser, Debug)]
#[command(
    name = "laptop-price",
    version = "0.1.0",
    about = "Estimate a laptop's market price from its specifications."
)]
pub struct Cli {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// The command to run; opens the form when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// True when the command opens the terminal form.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Form))
    }

    pub fn run(self) -> Result<()> {
        let store = ArtifactStore::new(self.artifacts.into());
        let artifacts = store.load()?;

        let options  = FormOptions::from_source(&artifacts.reference)?;
        let use_case = PredictUseCase::new(artifacts.pipeline);

        match self.command.unwrap_or(Commands::Form) {
            Commands::Form          => crate::ui::run(&use_case, options),
            Commands::Predict(args) => run_predict(&use_case, &options, &args),
            Commands::Options(args) => run_options(&options, &args),
        }
    }
}

/// Handles the `predict` subcommand. A failed prediction comes
/// back as an error, so the process exits non-zero.
fn run_predict<P: PricePipeline>(
    use_case: &PredictUseCase<P>,
    options:  &FormOptions,
    args:     &PredictArgs,
) -> Result<()> {
    let spec = LaptopSpec::from(args);
    options.validate(&spec)?;

    match use_case.submit(&spec) {
        PredictionOutcome::Price(estimate) => {
            println!("{}", render_estimate(&estimate, args.json)?);
            Ok(())
        }
        PredictionOutcome::Failed(err) => Err(anyhow::Error::new(err).context("prediction failed")),
    }
}

fn render_estimate(estimate: &PriceEstimate, json: bool) -> Result<String> {
    if !json {
        return Ok(estimate.to_string());
    }
    let value = serde_json::json!({
        "currency":  CURRENCY,
        "amount":    estimate.amount,
        "log_value": estimate.log_value,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Handles the `options` subcommand.
fn run_options(options: &FormOptions, args: &OptionsArgs) -> Result<()> {
    println!("{}", render_options(options, args.json)?);
    Ok(())
}

fn render_options(options: &FormOptions, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(options)?);
    }

    let lines: Vec<String> = Field::ALL
        .iter()
        .map(|&field| {
            let choices = match field {
                Field::Company     => options.company.join(", "),
                Field::TypeName    => options.type_name.join(", "),
                Field::Ram         => join(&options.ram),
                Field::Weight      => "any number".to_string(),
                Field::TouchScreen => join(&options.touchscreen),
                Field::Ips         => join(&options.ips),
                Field::ScreenSize  => "any number greater than 0".to_string(),
                Field::Resolution  => options.resolution.join(", "),
                Field::Cpu         => options.cpu_brand.join(", "),
                Field::Hdd         => join(&options.hdd),
                Field::Ssd         => join(&options.ssd),
                Field::Gpu         => options.gpu_brand.join(", "),
                Field::Os          => options.os.join(", "),
            };
            format!("{:<22}{}", field.label(), choices)
        })
        .collect();
    Ok(lines.join("\n"))
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::domain::error::PredictError;
    use crate::infra::artifacts::ArtifactConfig;
    use crate::ml::pipeline::FittedPipeline;

    fn demo() -> (PredictUseCase<FittedPipeline>, FormOptions) {
        let config = ArtifactConfig {
            dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("demo"),
            ..ArtifactConfig::default()
        };
        let artifacts = ArtifactStore::new(config).load().unwrap();
        let options   = FormOptions::from_source(&artifacts.reference).unwrap();
        (PredictUseCase::new(artifacts.pipeline), options)
    }

    fn predict_args(company: &str, resolution: &str) -> PredictArgs {
        let cli = Cli::try_parse_from([
            "laptop-price", "predict",
            "--company", company, "--type", "Notebook", "--ram", "8",
            "--weight", "1.5", "--screen-size", "13.3", "--resolution", resolution,
            "--cpu", "Intel", "--ssd", "256", "--gpu", "Intel", "--os", "Windows",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Predict(args)) => args,
            other => panic!("expected predict, got {other:?}"),
        }
    }

    #[test]
    fn test_predict_demo_laptop() {
        let (use_case, options) = demo();
        assert!(run_predict(&use_case, &options, &predict_args("Dell", "1920x1080")).is_ok());
    }

    #[test]
    fn test_predict_rejects_off_list_brand() {
        let (use_case, options) = demo();
        let err = run_predict(&use_case, &options, &predict_args("Razer", "1920x1080")).unwrap_err();
        assert!(err.to_string().contains("not a valid choice for Brand"), "{err}");
    }

    #[test]
    fn test_failed_prediction_is_an_error_with_its_cause() {
        let (use_case, options) = demo();
        let err = run_predict(&use_case, &options, &predict_args("Dell", "1920by1080")).unwrap_err();

        // Top line carries no second "Error" prefix; the cause follows
        assert_eq!(err.to_string(), "prediction failed");
        assert!(matches!(
            err.downcast_ref::<PredictError>(),
            Some(PredictError::Resolution { .. })
        ));
    }

    #[test]
    fn test_estimate_renders_as_text_or_json() {
        let estimate = PriceEstimate::from_log(10.5).unwrap();
        assert_eq!(render_estimate(&estimate, false).unwrap(), "Predicted Price : INR 36316");

        let json: serde_json::Value =
            serde_json::from_str(&render_estimate(&estimate, true).unwrap()).unwrap();
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["amount"], 36316);
        assert_eq!(json["log_value"], 10.5);
    }

    #[test]
    fn test_options_list_every_field() {
        let (_, options) = demo();

        let text = render_options(&options, false).unwrap();
        assert_eq!(text.lines().count(), Field::ALL.len());
        let brand = text.lines().next().unwrap();
        assert!(brand.starts_with("Brand"), "{brand}");
        assert!(brand.contains("Dell"), "{brand}");
        assert!(text.contains("2, 4, 6, 8, 12, 16, 24, 32, 64"));

        let json: serde_json::Value =
            serde_json::from_str(&render_options(&options, true).unwrap()).unwrap();
        assert_eq!(json["ram"][0], 2);
        assert_eq!(json["touchscreen"], serde_json::json!(["No", "Yes"]));
    }
}
