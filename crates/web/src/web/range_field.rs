use leptos::prelude::*;

use neurovis::params::{decimals_for_step, ParamSpec};

use crate::float_fmt::fmt_f32_fixed;
use crate::ui_model::parse_control;

/// Range slider bound to one simulation parameter.
///
/// Emits on every `input` event (continuous, not on commit). Values are
/// snapped onto the spec's grid before they leave this component.
#[component]
pub(super) fn RangeField(
    spec: ParamSpec,
    accent: &'static str,
    readout: Callback<f32, String>,
    value: Signal<f32>,
    on_change: Callback<f32>,
) -> impl IntoView {
    let input_id = format!("param-{}", spec.key);
    let decimals = decimals_for_step(spec.step);

    view! {
        <div>
            <div style="display: flex; justify-content: space-between; color: #ffffff; margin-bottom: 4px; font-family: monospace; font-size: 0.75rem;">
                <label for=input_id.clone() style="display: flex; align-items: center; gap: 8px;">
                    <span style=format!("width: 8px; height: 8px; border-radius: 9999px; background: {accent};")></span>
                    {spec.label}
                </label>
                <span style=format!("color: {accent};")>{move || readout.run(value.get())}</span>
            </div>
            <input
                id=input_id
                type="range"
                style=format!("width: 100%; accent-color: {accent}; cursor: pointer;")
                min=fmt_f32_fixed(spec.min, decimals)
                max=fmt_f32_fixed(spec.max, decimals)
                step=fmt_f32_fixed(spec.step, decimals)
                prop:value=move || fmt_f32_fixed(value.get(), decimals)
                on:input=move |ev| {
                    if let Some(v) = parse_control(&spec, &event_target_value(&ev)) {
                        on_change.run(v);
                    }
                }
            />
        </div>
    }
}
