//! Headless run of the neural widget on the tokio driver.
//!
//! Prints the grid as text for a few seconds while sweeping the parameters
//! through all three diagnoses.
//!
//!   cargo run -p neurovis --example headless --features runtime

use std::time::Duration;

use neurovis::prelude::*;
use tracing::info;

const SHADES: [char; 5] = [' ', '.', 'o', 'O', '@'];

fn render(snap: &Snapshot) -> String {
    let mut out = String::new();
    for row in snap.neurons.chunks(snap.layout.columns) {
        for n in row {
            let level = (n.style.opacity * (SHADES.len() - 1) as f32).round() as usize;
            out.push(SHADES[level.min(SHADES.len() - 1)]);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cfg = WidgetConfig::with_neurons(25);
    cfg.validate()?;

    let sim = SharedSimulator::new(ActivationSimulator::new(&cfg));
    let mount = mount_tokio(sim.clone());
    info!("Mounted {} neurons, ticking every {:?}", cfg.neuron_count, TICK_PERIOD);

    let sweep = [(1.5, 20.0), (3.0, 10.0), (0.5, 70.0)];
    for (gain, threshold) in sweep {
        sim.set_gain(GAIN.snap(gain));
        sim.set_threshold(THRESHOLD.snap(threshold));

        for _ in 0..5 {
            tokio::time::sleep(Duration::from_millis(400)).await;
            let (snap, firing) = sim.with(|s| (s.snapshot(), s.grid().firing_fraction()));
            println!(
                "tick {:>3}  gain {:.1}x  threshold -{}mV  firing {:>3.0}%  {}",
                snap.tick,
                snap.params.gain,
                snap.params.threshold,
                firing * 100.0,
                snap.diagnosis.status_line()
            );
            println!("{}", render(&snap));
        }
    }

    mount.unmount();
    info!("Stopped after {} ticks", sim.tick_count());
    Ok(())
}
