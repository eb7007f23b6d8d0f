use leptos::prelude::*;

use neurovis::prelude::*;

use super::range_field::RangeField;
use crate::ui_model::{
    gain_readout, grid_css, neuron_css, status_css, threshold_readout, PanelState,
    WIDGET_SUBTITLE, WIDGET_TITLE,
};

const NEURON_BASE_CSS: &str = "width: 100%; aspect-ratio: 1 / 1; border-radius: 9999px; background: #ffffff; border: 1px solid rgba(255, 255, 255, 0.1); transition: all 200ms ease-in-out;";

/// Browser interval driving the widget's ticks.
struct BrowserInterval(IntervalHandle);

impl TimerHandle for BrowserInterval {
    fn cancel(self) {
        self.0.clear();
    }
}

fn log_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// The neural activation widget. Fills whatever box the host gives it.
#[component]
pub(super) fn NeuralVisualizer(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = match config {
        Some(cfg) => match cfg.validate() {
            Ok(()) => cfg,
            Err(e) => {
                log_warn(&format!("neural widget: {e}; using defaults"));
                WidgetConfig::default()
            }
        },
        None => WidgetConfig::default(),
    };
    let neuron_count = config.neuron_count;

    let sim = StoredValue::new(ActivationSimulator::new(&config));
    let (snapshot, set_snapshot) = signal(sim.with_value(|s| s.snapshot()));
    // Bumped on every parameter write; readers go through the simulator.
    let params_rev = RwSignal::new(0u64);

    let tick = move || {
        sim.update_value(|s| s.tick());
        set_snapshot.set(sim.with_value(|s| s.snapshot()));
    };

    // The interval is wrapped in a Mount the moment it exists and released by
    // the owner's cleanup, whichever way this component goes away.
    let mount = match set_interval_with_handle(tick, TICK_PERIOD) {
        Ok(handle) => Some(Mount::new(BrowserInterval(handle))),
        Err(_) => {
            log_warn("neural widget: failed to start interval");
            None
        }
    };
    on_cleanup(move || {
        if let Some(mount) = mount {
            mount.unmount();
        }
    });

    let on_gain = Callback::new(move |v: f32| {
        sim.update_value(|s| s.set_gain(v));
        params_rev.update(|r| *r = r.wrapping_add(1));
    });
    let on_threshold = Callback::new(move |v: f32| {
        sim.update_value(|s| s.set_threshold(v));
        params_rev.update(|r| *r = r.wrapping_add(1));
    });

    let panel = move || {
        params_rev.track();
        sim.with_value(PanelState::of)
    };
    let gain = Signal::derive(move || panel().gain);
    let threshold = Signal::derive(move || panel().threshold);
    let diagnosis = move || panel().diagnosis;

    let columns = snapshot.with_untracked(|s| s.layout.columns);

    view! {
        <div style="display: flex; flex-direction: column; justify-content: space-between; padding: 1.5rem; background: #2d1b4e; width: 100%; height: 100%; overflow: hidden; position: relative; box-sizing: border-box;">
            <div style="margin-bottom: 1rem; text-align: center; flex-shrink: 0;">
                <h2 style="font-size: 1.5rem; font-weight: 700; color: #ffffff; margin: 0;">
                    {WIDGET_TITLE}
                </h2>
                <p style="font-size: 0.75rem; color: #d8b4fe; margin: 4px 0 0 0; font-family: monospace; text-transform: uppercase; letter-spacing: 0.1em; opacity: 0.8;">
                    {WIDGET_SUBTITLE}
                </p>
            </div>

            <div style=grid_css(columns)>
                {(0..neuron_count)
                    .map(|i| {
                        let style = move || {
                            snapshot.with(|s| {
                                let dynamic = s
                                    .neurons
                                    .get(i)
                                    .map(|n| neuron_css(&n.style))
                                    .unwrap_or_default();
                                format!("{NEURON_BASE_CSS} {dynamic}")
                            })
                        };
                        view! { <div style=style></div> }
                    })
                    .collect_view()}
            </div>

            <div style="display: flex; flex-direction: column; gap: 1rem; background: #1a0f2e; padding: 1rem; border-radius: 0.75rem; border: 1px solid rgba(139, 85, 208, 0.2); flex-shrink: 0; margin-top: 1rem;">
                <RangeField
                    spec=GAIN
                    accent="#a477e1"
                    readout=Callback::new(gain_readout)
                    value=gain
                    on_change=on_gain
                />
                <RangeField
                    spec=THRESHOLD
                    accent="#f472b6"
                    readout=Callback::new(threshold_readout)
                    value=threshold
                    on_change=on_threshold
                />
                <div style="padding-top: 0.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1);">
                    <p style=move || format!(
                        "text-align: center; font-family: monospace; font-weight: 700; font-size: 0.75rem; letter-spacing: 0.1em; margin: 0; transition: color 300ms; {}",
                        status_css(diagnosis())
                    )>
                        {move || diagnosis().status_line()}
                    </p>
                </div>
            </div>
        </div>
    }
}
