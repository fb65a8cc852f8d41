use anyhow::Result;
use clap::Args;
use realcheck_core::client::Prediction;
use realcheck_core::interpret::interpret;

use crate::summary;

#[derive(Args)]
pub struct InterpretArgs {
    /// Raw `prediction` value (1 = authentic, anything else = synthetic)
    #[arg(long)]
    pub prediction: i64,

    /// Raw `confidence` value: probability of the authentic class
    #[arg(long, allow_negative_numbers = true)]
    pub confidence: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &InterpretArgs) -> Result<()> {
    if !(0.0..=1.0).contains(&args.confidence) {
        tracing::warn!(confidence = args.confidence, "confidence outside [0, 1]");
    }

    let prediction = Prediction::from_raw(args.prediction as f64);
    let result = interpret(prediction, args.confidence);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        summary::print_result(None, &result);
    }
    Ok(())
}
