use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use liferail_core::lifecycle::State;
use liferail_harness::config::Config;
use liferail_harness::demo::{transition_id_for, DemoCallbacks};
use liferail_node::{dtos, LifecycleNode, LifecycleService};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_args();

    let callbacks = DemoCallbacks {
        fail_on: config.fail_on.clone(),
        error_on: config.error_on.clone(),
    };
    let node = LifecycleNode::new(config.node_name.clone(), Box::new(callbacks))
        .context("construct lifecycle component")?;

    // Subscribe before the node moves behind the service lock.
    let mut events = node.subscribe_transition_events();
    let service = LifecycleService::new(Arc::new(Mutex::new(node)));

    let event_log = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ev) => info!(
                    "event t={}ns {} ({}): {:?} -> {:?}",
                    ev.timestamp_ns,
                    ev.transition_label,
                    ev.transition_id,
                    ev.start_state,
                    ev.goal_state
                ),
                Err(RecvError::Lagged(missed)) => warn!("event stream lagged by {missed}"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    info!(
        "harness started node_name={} script={:?}",
        config.node_name, config.script
    );

    for step in &config.script {
        let snapshot = service.handle_get_state(dtos::get_state::Request);
        let current = State::from_id(snapshot.state_id).unwrap_or(State::Unknown);

        let Some(transition_id) = transition_id_for(step, current) else {
            warn!("skipping step {step:?}: no transition from {current:?}");
            continue;
        };

        let resp = service.handle_change_state(dtos::change_state::Request { transition_id });
        if resp.success {
            info!("step {step}: {}", resp.message);
        } else {
            warn!("step {step}: {}", resp.message);
        }
    }

    let final_state = service.handle_get_state(dtos::get_state::Request);
    info!("final state: {} ({})", final_state.label, final_state.state_id);

    // Give the event logger a beat to flush, then stop it.
    tokio::time::sleep(Duration::from_millis(50)).await;
    event_log.abort();
    Ok(())
}
