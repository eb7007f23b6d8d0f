use leptos::prelude::*;

use super::neural::NeuralVisualizer;
use crate::ui_model::{projects, CardVisual, Carousel, Project, NEURAL_PROJECT_ID};

const NAV_BTN_CSS: &str = "position: absolute; top: 50%; transform: translateY(-50%); z-index: 20; padding: 12px; border-radius: 9999px; border: none; background: rgba(255, 255, 255, 0.1); color: #ffffff; cursor: pointer; font-size: 1.25rem;";

/// Project carousel. Mounts the neural widget only inside its own card.
#[component]
pub(super) fn ProjectDeck() -> impl IntoView {
    let all = projects();
    let (carousel, set_carousel) = signal(Carousel::new(all.len()));
    let current = move || -> &'static Project { &all[carousel.get().index()] };

    view! {
        <main style="display: flex; min-height: 100vh; flex-direction: column; align-items: center; justify-content: center; background: #a477e1; color: #ffffff; padding: 2rem; box-sizing: border-box;">
            <div style="margin-bottom: 3rem; text-align: center; max-width: 42rem;">
                <h1 style="font-size: 3rem; font-weight: 700; margin: 0 0 1rem 0;">"My projects"</h1>
                <p style="font-size: 1.25rem; opacity: 0.9; margin: 0;">
                    "Bridging Computer Science & Psychology."
                </p>
            </div>

            <div style="position: relative; width: 100%; max-width: 64rem; aspect-ratio: 2 / 1;">
                <button
                    style=format!("{NAV_BTN_CSS} left: -4rem;")
                    aria-label="Previous project"
                    on:click=move |_| set_carousel.update(|c| *c = c.prev())
                >
                    "←"
                </button>
                <button
                    style=format!("{NAV_BTN_CSS} right: -4rem;")
                    aria-label="Next project"
                    on:click=move |_| set_carousel.update(|c| *c = c.next())
                >
                    "→"
                </button>

                <div style="position: relative; display: flex; width: 100%; height: 100%; overflow: hidden; border-radius: 1.5rem; background: #ffffff; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);">
                    <div style="width: 50%; background: #2d1b4e; display: flex; align-items: center; justify-content: center; overflow: hidden; position: relative;">
                        <Show
                            when=move || current().id == NEURAL_PROJECT_ID
                            fallback=move || view! { <Placeholder project=Signal::derive(current) /> }
                        >
                            <div style="width: 100%; height: 100%;">
                                <NeuralVisualizer />
                            </div>
                        </Show>
                    </div>

                    <ProjectDetails project=Signal::derive(current) />
                </div>
            </div>
        </main>
    }
}

#[component]
fn Placeholder(project: Signal<&'static Project>) -> impl IntoView {
    let visual = move || project.get().visual();
    view! {
        <div style="text-align: center;">
            <div style="font-size: 3.75rem; margin-bottom: 1rem; opacity: 0.2; filter: grayscale(1);">
                {move || match visual() {
                    CardVisual::Placeholder { icon, .. } => icon,
                    CardVisual::NeuralWidget => "",
                }}
            </div>
            <p style="color: #9ca3af; font-family: monospace; font-size: 0.875rem;">
                {move || match visual() {
                    CardVisual::Placeholder { caption, .. } => caption,
                    CardVisual::NeuralWidget => String::new(),
                }}
            </p>
        </div>
    }
}

#[component]
fn ProjectDetails(project: Signal<&'static Project>) -> impl IntoView {
    view! {
        <div style="width: 50%; padding: 3rem; display: flex; flex-direction: column; justify-content: center; background: #ffffff; color: #111827; box-sizing: border-box;">
            <span style="font-family: monospace; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; color: #8b55d0; margin-bottom: 1rem;">
                {move || project.get().category}
            </span>
            <h2 style="font-size: 2.25rem; font-weight: 700; margin: 0 0 1.5rem 0; line-height: 1.2;">
                {move || project.get().title}
            </h2>
            <p style="font-size: 1.125rem; color: #4b5563; margin: 0 0 2rem 0; line-height: 1.6;">
                {move || project.get().description}
            </p>
            <div style="display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 2.5rem;">
                {move || {
                    project
                        .get()
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span style="font-family: monospace; font-size: 0.75rem; background: #f3f4f6; color: #4b5563; padding: 4px 12px; border-radius: 9999px; border: 1px solid #e5e7eb;">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div style="display: flex; gap: 1rem; margin-top: auto;">
                <a
                    href=move || project.get().link
                    target="_blank"
                    rel="noreferrer"
                    style="display: inline-flex; align-items: center; gap: 0.5rem; background: #171717; color: #ffffff; padding: 12px 24px; border-radius: 0.5rem; text-decoration: none;"
                >
                    "View Code"
                </a>
                <Show when=move || project.get().has_live_demo()>
                    <a
                        href="#"
                        style="display: inline-flex; align-items: center; gap: 0.5rem; border: 1px solid #e5e7eb; color: #374151; padding: 12px 24px; border-radius: 0.5rem; text-decoration: none;"
                    >
                        "Live Demo"
                    </a>
                </Show>
            </div>
            <span style="margin-top: 1rem; font-size: 0.75rem; color: #9ca3af;">
                {move || project.get().status.label()}
            </span>
        </div>
    }
}
