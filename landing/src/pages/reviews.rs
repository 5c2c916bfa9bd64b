// Reviews - rating summary, filters, the full list and the submission modal
use crate::sections::icons::{ICON_CLOSE, ICON_STAR, Svg};
use crate::sections::{ReviewCard, StarRow};
use crate::state::{deliver, site, use_app};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vermixor::catalog;
use vermixor::filters::{ALL, RatingFilter, ReviewFilter, ServiceFilter, service_label};
use vermixor::forms::{Field, FormKind, ReviewForm, ValidationErrors};
use vermixor::submit::SubmitOutcome;
use vermixor::types::Rating;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let catalog = catalog::embedded();
    let service = RwSignal::new(ALL.to_string());
    let rating = RwSignal::new(ALL.to_string());
    let modal_open = RwSignal::new(false);

    let filtered = Memo::new(move |_| {
        let filter = ReviewFilter::new(
            ServiceFilter::parse(&service.get()),
            RatingFilter::parse(&rating.get()),
        );
        catalog.filter_reviews(&filter)
    });

    view! {
        <section class="page-hero">
            <h1 class="hero-title">"Client " <span class="gradient-text">"Reviews"</span></h1>
            <p class="hero-subtitle">"Honest feedback from the businesses we've worked with."</p>
            <button class="btn btn-primary" on:click=move |_| modal_open.set(true)>
                "Write a Review"
            </button>
        </section>

        <section class="section">
            <RatingSummaryCard />
        </section>

        <section class="section">
            <div class="filter-bar">
                <label class="form-field">
                    <span>"Service"</span>
                    <select
                        prop:value=move || service.get()
                        on:change=move |ev| service.set(event_target_value(&ev))
                    >
                        <option value=ALL>"All Services"</option>
                        {catalog
                            .service_tags()
                            .into_iter()
                            .map(|tag| view! { <option value=tag>{service_label(tag)}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Rating"</span>
                    <select
                        prop:value=move || rating.get()
                        on:change=move |ev| rating.set(event_target_value(&ev))
                    >
                        <option value=ALL>"All Ratings"</option>
                        {(Rating::MIN..=Rating::MAX)
                            .rev()
                            .map(|stars| {
                                let label = if stars == Rating::MAX {
                                    "5 Stars".to_string()
                                } else {
                                    format!("{stars}+ Stars")
                                };
                                view! { <option value=stars.to_string()>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <span class="filter-count">
                    {move || format!("{} reviews", filtered.with(Vec::len))}
                </span>
            </div>

            <Show
                when=move || filtered.with(|reviews| !reviews.is_empty())
                fallback=|| view! {
                    <p class="empty-state">"No reviews match your filters yet."</p>
                }
            >
                <div class="card-grid">
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|review| view! { <ReviewCard review=review /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>

        <Show when=move || modal_open.get()>
            <ReviewModal on_close=move || modal_open.set(false) />
        </Show>
    }
}

#[component]
fn RatingSummaryCard() -> impl IntoView {
    let summary = catalog::embedded().rating_summary();
    let average = summary.display_average().unwrap_or_else(|| "-".to_string());
    let filled = summary.filled_stars();
    let total = summary.total;
    let buckets: Vec<_> = summary.buckets().collect();

    view! {
        <div class="card rating-summary">
            <div class="rating-average">
                <span class="rating-number">{average}</span>
                <StarRow filled=filled />
                <span class="rating-total">{format!("Based on {total} reviews")}</span>
            </div>
            <div class="rating-bars">
                {buckets
                    .into_iter()
                    .map(|bucket| {
                        view! {
                            <div class="rating-bar">
                                <span class="rating-bar-label">{bucket.stars} "★"</span>
                                <div class="rating-bar-track">
                                    <div
                                        class="rating-bar-fill"
                                        style:width=format!("{:.0}%", bucket.percent)
                                    ></div>
                                </div>
                                <span class="rating-bar-count">{bucket.count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ReviewModal(on_close: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let app = use_app();
    let services = &catalog::embedded().services;
    let form = RwSignal::new(ReviewForm::default());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let submitting = RwSignal::new(false);
    let min_len = site().form_rules().min_review_len;

    let invalid = move |field: Field| errors.with(|e| e.as_ref().is_some_and(|e| e.has(field)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let outcome = deliver(&snapshot).await;
            errors.set(match &outcome {
                SubmitOutcome::Invalid(e) => Some(e.clone()),
                _ => None,
            });
            app.notify(outcome.notice(FormKind::Review));
            submitting.set(false);
            if outcome.is_accepted() {
                form.set(ReviewForm::default());
                on_close();
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close()>
            <form
                class="modal card form"
                novalidate
                on:click=|ev| ev.stop_propagation()
                on:submit=on_submit
            >
                <div class="modal-header">
                    <h2 class="card-title">"Share Your Experience"</h2>
                    <button type="button" class="modal-close" aria-label="Close" on:click=move |_| on_close()>
                        <Svg path=ICON_CLOSE size="20" />
                    </button>
                </div>

                <div class="form-row">
                    <label class="form-field" class:invalid=move || invalid(Field::Name)>
                        <span>"Name *"</span>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field" class:invalid=move || invalid(Field::Email)>
                        <span>"Email *"</span>
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="form-row">
                    <label class="form-field" class:invalid=move || invalid(Field::Company)>
                        <span>"Company *"</span>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.company.clone())
                            on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field" class:invalid=move || invalid(Field::Role)>
                        <span>"Role *"</span>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.role.clone())
                            on:input=move |ev| form.update(|f| f.role = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="form-field">
                    <span>"Service"</span>
                    <select
                        prop:value=move || form.with(|f| f.service.clone())
                        on:change=move |ev| form.update(|f| f.service = event_target_value(&ev))
                    >
                        <option value="">"Select the service you used"</option>
                        {services
                            .iter()
                            .map(|s| view! { <option value=s.id.as_str()>{s.title.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <div class="form-field" class:invalid=move || invalid(Field::Rating)>
                    <span>"Rating *"</span>
                    <div class="rating-picker">
                        {(Rating::MIN..=Rating::MAX)
                            .map(|stars| {
                                view! {
                                    <button
                                        type="button"
                                        class="star-button"
                                        class:filled=move || form.with(|f| f.rating >= stars)
                                        aria-label=format!("{stars} stars")
                                        on:click=move |_| form.update(|f| f.rating = stars)
                                    >
                                        <Svg path=ICON_STAR size="28" />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <label class="form-field" class:invalid=move || invalid(Field::Review)>
                    <span>"Your Review *"</span>
                    <textarea
                        rows="5"
                        placeholder="What was it like working with us?"
                        prop:value=move || form.with(|f| f.review.clone())
                        on:input=move |ev| form.update(|f| f.review = event_target_value(&ev))
                    ></textarea>
                    <small class="form-hint">
                        {move || {
                            let len = form.with(|f| f.review.trim().chars().count());
                            format!("{len}/{min_len} characters minimum")
                        }}
                    </small>
                </label>

                <label class="form-check" class:invalid=move || invalid(Field::Consent)>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.consent)
                        on:change=move |ev| form.update(|f| f.consent = event_target_checked(&ev))
                    />
                    <span>"I agree to have my review published on the Vermixor website."</span>
                </label>

                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                </button>
            </form>
        </div>
    }
}
