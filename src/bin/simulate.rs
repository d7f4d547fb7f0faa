use std::fs::File;
use std::io::{BufWriter, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tickermatch::config::Settings;
use tickermatch::metrics::install_recorder;
use tickermatch::{MatchingEngine, Side};

/// Random order-flow driver. Feeds the matching core through its public
/// interface only; the core assumes nothing about this caller.
#[derive(Parser, Debug)]
#[command(name = "simulate")]
struct Args {
    #[arg(long, default_value = "config/example.yaml")]
    config: String,
    /// Overrides the seed from the config file.
    #[arg(long)]
    seed: Option<u64>,
    /// Write emitted trades as JSON lines to this path.
    #[arg(long)]
    trades_out: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let _prom = install_recorder()?;

    let args = Args::parse();
    let settings = Settings::load(&args.config)?.simulation;
    let seed = args.seed.unwrap_or(settings.seed);

    let mut trades_out = args
        .trades_out
        .as_deref()
        .map(|path| File::create(path).map(BufWriter::new))
        .transpose()?;

    let mut engine = MatchingEngine::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut submitted_buy = 0u64;
    let mut submitted_sell = 0u64;
    let mut trade_count = 0u64;
    let mut traded_quantity = 0u64;

    for _ in 0..settings.orders {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let instrument = format!("TICKER{}", rng.gen_range(1..=settings.instruments));
        let quantity = rng.gen_range(1..=settings.max_quantity);
        let price = rng.gen_range(settings.min_price..=settings.max_price);

        engine.submit(side, &instrument, quantity, price)?;
        match side {
            Side::Buy => submitted_buy += quantity,
            Side::Sell => submitted_sell += quantity,
        }

        for trade in engine.match_instrument(&instrument) {
            trade_count += 1;
            traded_quantity += trade.quantity;
            if let Some(out) = trades_out.as_mut() {
                serde_json::to_writer(&mut *out, &trade)?;
                out.write_all(b"\n")?;
            }
        }
    }

    if let Some(mut out) = trades_out {
        out.flush()?;
    }

    let resting_buy = engine.resting_quantity(Side::Buy);
    let resting_sell = engine.resting_quantity(Side::Sell);
    info!(
        orders = settings.orders,
        instruments = engine.num_instruments(),
        trades = trade_count,
        traded_quantity,
        resting_buy,
        resting_sell,
        "simulation complete"
    );

    // Conservation: every submitted unit is either still resting or traded.
    anyhow::ensure!(
        submitted_buy == resting_buy + traded_quantity,
        "buy quantity not conserved: submitted {submitted_buy}, resting {resting_buy}, traded {traded_quantity}"
    );
    anyhow::ensure!(
        submitted_sell == resting_sell + traded_quantity,
        "sell quantity not conserved: submitted {submitted_sell}, resting {resting_sell}, traded {traded_quantity}"
    );
    Ok(())
}
