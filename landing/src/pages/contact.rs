// Contact page - project inquiry form, contact methods and office hours
use crate::browser;
use crate::sections::icons::{ICON_CALENDAR, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, Svg};
use crate::state::{deliver, site, use_app};
use std::time::Duration;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vermixor::catalog;
use vermixor::forms::{ContactForm, Field, FormKind, ValidationErrors};
use vermixor::submit::SubmitOutcome;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1 class="hero-title">"Let's " <span class="gradient-text">"Talk"</span></h1>
            <p class="hero-subtitle">
                "Tell us about your project and we'll get back to you within 24 hours."
            </p>
        </section>

        <section class="section">
            <div class="two-column two-column-wide">
                <ContactFormCard />
                <aside class="contact-aside">
                    <ContactMethods />
                    <OfficeHoursCard />
                </aside>
            </div>
        </section>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let app = use_app();
    let options = &catalog::embedded().contact_options;
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let submitting = RwSignal::new(false);

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
            app.notify(outcome.notice(FormKind::Contact));
            if outcome.is_accepted() {
                form.set(ContactForm::default());
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="card form" on:submit=on_submit novalidate>
            <h2 class="card-title">"Start Your Project"</h2>
            <div class="form-row">
                <label class="form-field" class:invalid=move || invalid(Field::Name)>
                    <span>"Name *"</span>
                    <input
                        type="text"
                        placeholder="Your full name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="form-field" class:invalid=move || invalid(Field::Email)>
                    <span>"Email *"</span>
                    <input
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="form-field">
                <span>"Company"</span>
                <input
                    type="text"
                    placeholder="Company name (optional)"
                    prop:value=move || form.with(|f| f.company.clone())
                    on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                />
            </label>
            <div class="form-row form-row-3">
                <label class="form-field">
                    <span>"Service Interest"</span>
                    <select
                        prop:value=move || form.with(|f| f.service.clone())
                        on:change=move |ev| form.update(|f| f.service = event_target_value(&ev))
                    >
                        <option value="">"Select a service"</option>
                        {choices(&options.services)}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Budget Range"</span>
                    <select
                        prop:value=move || form.with(|f| f.budget.clone())
                        on:change=move |ev| form.update(|f| f.budget = event_target_value(&ev))
                    >
                        <option value="">"Select budget"</option>
                        {choices(&options.budgets)}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Timeline"</span>
                    <select
                        prop:value=move || form.with(|f| f.timeline.clone())
                        on:change=move |ev| form.update(|f| f.timeline = event_target_value(&ev))
                    >
                        <option value="">"Select timeline"</option>
                        {choices(&options.timelines)}
                    </select>
                </label>
            </div>
            <label class="form-field" class:invalid=move || invalid(Field::Message)>
                <span>"Project Details *"</span>
                <textarea
                    rows="6"
                    placeholder="Tell us about your goals, features and any deadlines"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

/// `<option>` per choice, value and label identical.
fn choices(values: &'static [String]) -> impl IntoView {
    values
        .iter()
        .map(|value| view! { <option value=value.as_str()>{value.as_str()}</option> })
        .collect_view()
}

#[component]
fn ContactMethods() -> impl IntoView {
    let brand = &site().brand;
    let (copied, set_copied) = signal(false);

    let copy_email = move |_| {
        if browser::copy_to_clipboard(&brand.email) {
            set_copied.set(true);
            set_timeout(move || set_copied.set(false), Duration::from_millis(2000));
        }
    };

    view! {
        <div class="card">
            <h3 class="card-title">"Get in Touch"</h3>
            <ul class="contact-methods">
                <li>
                    <Svg path=ICON_MAIL size="20" />
                    <a href=format!("mailto:{}", brand.email)>{brand.email.as_str()}</a>
                    <button type="button" class="copy-btn" on:click=copy_email>
                        {move || if copied.get() { "copied" } else { "copy" }}
                    </button>
                </li>
                <li>
                    <Svg path=ICON_PHONE size="20" />
                    <a href=format!("tel:{}", brand.phone)>{brand.phone.as_str()}</a>
                </li>
                <li>
                    <Svg path=ICON_MAP_PIN size="20" />
                    <span>{brand.location.as_str()}</span>
                </li>
                <li>
                    <Svg path=ICON_CALENDAR size="20" />
                    <a href=brand.calendly_url.as_str() target="_blank" rel="noopener">
                        "Schedule a free consultation"
                    </a>
                </li>
            </ul>
        </div>
    }
}

#[component]
fn OfficeHoursCard() -> impl IntoView {
    let hours = &catalog::embedded().office_hours;

    view! {
        <div class="card">
            <h3 class="card-title">"Office Hours"</h3>
            <dl class="office-hours">
                {hours
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="office-hours-row">
                                <dt>{entry.day.as_str()}</dt>
                                <dd>{entry.hours.as_str()}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
