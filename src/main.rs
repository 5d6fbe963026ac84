use anyhow::{Context, Result};
use argh::FromArgs;
use descriptive_stats::{descriptive_statistics, DescriptiveStatistics};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const SAMPLES: [&[f64]; 3] = [
    &[4.0, 8.0, 2.0, 4.0, 5.0],
    &[4.0, 2.0, 6.0, 1.0, 3.0, 7.0, 5.0, 3.0, 7.0],
    &[5.0, 1.0, 1.0, 1.0, 3.0, -2.0, 2.0, 5.0, 7.0, 4.0, 5.0, 16.0],
];

#[derive(FromArgs, Debug)]
/// Print descriptive statistics of a sample as JSON
struct Args {
    /// JSON array of numbers to describe; the built-in samples are used when omitted
    #[argh(positional)]
    input: Option<String>,

    /// pretty-print the output
    #[argh(switch, short = 'p')]
    pretty: bool,
}

fn render(stats: &DescriptiveStatistics, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(stats)?
    } else {
        serde_json::to_string(stats)?
    };
    Ok(text)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();

    let described = match &args.input {
        Some(input) => {
            let value: Value =
                serde_json::from_str(input).context("input is not valid JSON")?;
            tracing::debug!(input = %value, "describing sample");
            let stats = descriptive_statistics(&value)
                .with_context(|| format!("cannot describe {value}"))?;
            println!("{}", render(&stats, args.pretty)?);
            1
        }
        None => {
            for sample in SAMPLES {
                tracing::debug!(len = sample.len(), "describing sample");
                let stats = descriptive_statistics(sample)?;
                println!("{}", render(&stats, args.pretty)?);
            }
            SAMPLES.len()
        }
    };

    tracing::info!(samples = described, "done");
    Ok(())
}
