//! Chain demo: exercises the distributed data-type protocols and logs
//! what happens, including per-node state reports.
//!
//! Run with `RUST_LOG=debug` to watch individual node dispatches, or the
//! default `info` to see just the scenario narration and reports.

use anyhow::Result;
use asynchain_rs::Chain;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,asynchain_rs=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    stack_demo()?;
    queue_demo()?;
    sorting_demo();
    merge_demo();
    register_demo();

    Ok(())
}

fn stack_demo() -> Result<()> {
    tracing::info!("stack: push 0, 1, 2 then pop");
    let mut chain = Chain::named("STACK");
    for w in [0, 1, 2] {
        chain.push(0, w);
    }
    tracing::info!(contents = ?chain.snapshot(0), "after pushes");
    let top = chain.pull(0)?;
    tracing::info!(top, contents = ?chain.snapshot(0), "after pop");
    chain.report(10, false);
    chain.stop();
    Ok(())
}

fn queue_demo() -> Result<()> {
    tracing::info!("queue: enqueue 0, 1, 2 then dequeue");
    let mut chain = Chain::named("QUEUE");
    for w in [0, 1, 2] {
        chain.add_last(0, w);
    }
    let front = chain.pull(0)?;
    tracing::info!(front, contents = ?chain.snapshot(0), "after dequeue");
    chain.stop();
    Ok(())
}

fn sorting_demo() {
    let input: &[u8] = &[2, 4, 1, 5, 2, 3];
    tracing::info!(?input, "sorting the same input three ways");
    let mut chain = Chain::named("SORT");

    chain.load_words(0, input);
    chain.bubble_sort(0);
    tracing::info!(sorted = ?chain.snapshot(0), "bubble sort");

    chain.load_words(0, input);
    chain.selection_sort(0);
    tracing::info!(sorted = ?chain.snapshot(0), "selection sort");

    chain.load_words(0, input);
    chain.insertion_sort(0);
    tracing::info!(sorted = ?chain.snapshot(0), "insertion sort");

    chain.stop();
}

fn merge_demo() {
    let mut chain = Chain::with_columns(&[&[1, 3, 5], &[0, 2, 4, 6]]);
    chain.merge_sorted_into(0, 1);
    tracing::info!(merged = ?chain.snapshot(1), "merged [1,3,5] into [0,2,4,6]");
    chain.report(10, false);
    chain.stop();
}

fn register_demo() {
    tracing::info!("registers: little-end-first multi-word integers");
    let mut chain = Chain::named("INT");
    chain.load_integer(0, &[0, 1, 2, 3]);
    chain.load_integer(1, &[0, 1, 2]);
    let a = chain.int_value(0);
    let b = chain.int_value(1);
    tracing::info!(
        %a,
        %b,
        b_less_than_a = chain.int_less(1, 0),
        "comparison resolves most significant words first"
    );
    chain.int_double(1);
    let doubled = chain.int_value(1);
    tracing::info!(%doubled, "after doubling b");
    chain.report(16, true);
    chain.stop();
}
