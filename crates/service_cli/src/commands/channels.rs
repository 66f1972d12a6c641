//! Channels command implementation
//!
//! Lists the distinct non-direct channels in the input: the set a scenario
//! file may configure reduction rates for.

use cannibal_core::compute_baseline;
use cannibal_scenario::non_direct_channels;
use tracing::info;

use crate::Result;

/// Run the channels command
pub fn run(input: Option<&str>, sample: bool) -> Result<()> {
    let rows = super::load_input(input, sample)?;
    let baseline = compute_baseline(&rows);
    let channels = non_direct_channels(&baseline);
    info!("Found {} non-direct channel(s)", channels.len());

    for channel in &channels {
        println!("{channel}");
    }
    Ok(())
}
