//! Card View Example
//!
//! Builds the card view for a running checkout experiment, fills in the
//! bucket statistics as an analytics job would, and prints the JSON the UI
//! receives.
//!
//! Run with: cargo run --example card_view
//! Set `RUST_LOG=experiment_views=trace` to see validation logging.

use anyhow::Context;
use experiment_views::domain::{Bucket, Experiment, ExperimentState};
use experiment_views::view::ExperimentView;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Experiment Card View ===\n");

    let mut experiment = Experiment::builder("exp-checkout-001", "shop")
        .label("Checkout Button Color")
        .build();
    experiment.transition(ExperimentState::Running);

    let buckets = vec![
        Bucket::new("exp-checkout-001", "control", 0.5, true),
        Bucket::new("exp-checkout-001", "green", 0.5, false).with_description("green button"),
    ];

    // -------------------------------------------------------------------------
    // 1. Build the view from the stored experiment
    // -------------------------------------------------------------------------
    let mut view = ExperimentView::from_experiment(&experiment)?;
    view.add_buckets(&buckets)?;
    view.set_favorite(true);

    // -------------------------------------------------------------------------
    // 2. Fill in statistics as they arrive
    // -------------------------------------------------------------------------
    let stats = [("control", 512, 0.101, 0.082, 0.120), ("green", 488, 0.134, 0.112, 0.156)];
    for (label, users, rate, lower, upper) in stats {
        let bucket = view
            .bucket_mut(label)
            .with_context(|| format!("bucket {label} not in view"))?;
        bucket.set_user_count(users)?;
        bucket.set_action_rate(rate);
        bucket.set_lower_bound(lower);
        bucket.set_upper_bound(upper);
    }
    view.set_total_number_users(1000)?;

    // -------------------------------------------------------------------------
    // 3. Invalid updates are rejected and leave the view unchanged
    // -------------------------------------------------------------------------
    if let Err(err) = view.set_total_number_users(-1) {
        println!("Rejected update: {err}");
    }

    println!("\n{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
