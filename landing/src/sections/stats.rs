use leptos::leptos_dom::helpers::{IntervalHandle, set_interval_with_handle};
use leptos::prelude::*;
use vermixor::catalog;
use vermixor::counter::CountUp;
use vermixor::types::Stat;

use crate::state::site;

#[component]
pub fn Stats() -> impl IntoView {
    let stats = &catalog::embedded().stats;

    view! {
        <section class="stats">
            <div class="stats-grid">
                {stats.iter().map(|stat| view! { <StatCounter stat=stat /> }).collect_view()}
            </div>
        </section>
    }
}

/// One stat counting up from zero once mounted.
#[component]
fn StatCounter(stat: &'static Stat) -> impl IntoView {
    let timing = &site().timing;
    let count = CountUp::new(stat.value, timing.counter_frames, site().counter_duration());
    let frame = RwSignal::new(0u32);
    let handle = StoredValue::new(None::<IntervalHandle>);

    let started = set_interval_with_handle(
        move || {
            frame.update(|f| *f += 1);
            if count.is_done(frame.get_untracked()) {
                if let Some(h) = handle.get_value() {
                    h.clear();
                }
            }
        },
        count.frame_interval(),
    );
    match started {
        Ok(h) => handle.set_value(Some(h)),
        Err(e) => {
            tracing::warn!("counter interval not started: {e:?}");
            frame.set(count.frames());
        }
    }
    on_cleanup(move || {
        if let Some(h) = handle.get_value() {
            h.clear();
        }
    });

    view! {
        <div class="stat">
            <div class="stat-value">
                {move || count.value_at(frame.get())}
                {stat.suffix.as_str()}
            </div>
            <div class="stat-label">{stat.label.as_str()}</div>
        </div>
    }
}
