//! Replay demo: a shopper that never gives up on red
//!
//! Feeds a stream of opponent offers into the frequency model one by one,
//! printing the estimated issue weights as they evolve, then scores a few
//! candidate bids.
//!
//! Run with: cargo run --example replay_demo

use freqmodel::{Bid, Domain, FrequencyModel, Issue, IssueId, OpponentModel, OpponentUtilitySpace};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("info,freqmodel=debug")
        .init();

    let domain = Domain::new(vec![
        Issue::new(1, "color", &["red", "blue", "green"]),
        Issue::new(2, "size", &["small", "medium", "large"]),
        Issue::new(3, "delivery", &["standard", "express"]),
    ]);

    let mut model = FrequencyModel::with_domain(&domain)?;

    let offers = [
        Bid::new().with(1, "red").with(2, "large").with(3, "express"),
        Bid::new().with(1, "red").with(2, "medium").with(3, "express"),
        Bid::new().with(1, "red").with(2, "small").with(3, "standard"),
        Bid::new().with(1, "red").with(2, "small").with(3, "express"),
        Bid::new().with(1, "red").with(2, "medium").with(3, "express"),
    ];

    println!("\n{} on {} issues\n", model.name(), domain.issue_count());

    for (round, bid) in offers.iter().enumerate() {
        let time = (round + 1) as f64 / offers.len() as f64;
        model.observe(bid, time)?;

        let weights = model.normalized_weights();
        println!(
            "offer #{} {:<40} color={:.3} size={:.3} delivery={:.3}",
            round + 1,
            bid.to_string(),
            weights[&IssueId(1)],
            weights[&IssueId(2)],
            weights[&IssueId(3)]
        );
    }

    let candidates = vec![
        Bid::new().with(1, "red").with(2, "medium").with(3, "express"),
        Bid::new().with(1, "green").with(2, "large").with(3, "standard"),
    ];

    println!("\nCandidate scores:");
    let mut space = OpponentUtilitySpace::new(&mut model);
    for scored in space.rank(&candidates)? {
        println!("  {:.4}  {}", scored.utility, scored.bid);
    }

    Ok(())
}
