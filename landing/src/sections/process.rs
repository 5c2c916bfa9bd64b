use leptos::prelude::*;
use vermixor::catalog;
use vermixor::types::ProcessStep;

#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <section class="section section-muted" id="process">
            <div class="section-header">
                <h2 class="section-title">"How We " <span class="gradient-text">"Work"</span></h2>
                <p class="section-subtitle">"A clear process with no surprises along the way."</p>
            </div>
            <ProcessSteps steps=catalog::embedded().process.as_slice() />
        </section>
    }
}

/// Numbered steps, shared by the home page and the service detail pages.
#[component]
pub fn ProcessSteps(steps: &'static [ProcessStep]) -> impl IntoView {
    view! {
        <ol class="process-steps">
            {steps
                .iter()
                .map(|step| {
                    view! {
                        <li class="process-step">
                            <span class="process-number">{step.step}</span>
                            <h3 class="process-title">{step.title.as_str()}</h3>
                            <p class="process-text">{step.description.as_str()}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
