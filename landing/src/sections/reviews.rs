use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use vermixor::carousel::Carousel;
use vermixor::catalog;
use vermixor::filters::service_label;
use vermixor::types::{Rating, Review};

use super::icons::{ICON_BADGE_CHECK, ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, ICON_STAR, Svg};
use crate::state::site;

/// Featured testimonials, auto-advancing.
#[component]
pub fn ReviewsCarousel() -> impl IntoView {
    let reviews = catalog::embedded().featured_reviews();

    view! {
        <section class="section section-muted" id="testimonials">
            <div class="section-header">
                <h2 class="section-title">"What Clients " <span class="gradient-text">"Say"</span></h2>
                <p class="section-subtitle">"Real feedback from the teams we've worked with."</p>
            </div>
            {match Carousel::new(reviews.len()) {
                Some(carousel) => view! { <CarouselTrack reviews=reviews carousel=carousel /> }.into_any(),
                None => view! { <p class="empty-state">"Testimonials are on their way."</p> }.into_any(),
            }}
            <div class="section-footer">
                <a href="/reviews" class="btn btn-outline">"Read All Reviews"</a>
            </div>
        </section>
    }
}

#[component]
fn CarouselTrack(reviews: Vec<&'static Review>, carousel: Carousel) -> impl IntoView {
    let carousel = RwSignal::new(carousel);

    match set_interval_with_handle(
        move || carousel.update(|c| {
            c.advance();
        }),
        site().carousel_interval(),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("carousel auto-advance disabled: {e:?}"),
    }

    let slides = reviews.clone();
    let current = move || slides[carousel.with(Carousel::index)];

    view! {
        <div class="carousel">
            <button
                class="carousel-nav"
                aria-label="Previous review"
                on:click=move |_| carousel.update(|c| {
                    c.retreat();
                })
            >
                <Svg path=ICON_CHEVRON_LEFT />
            </button>
            <div class="carousel-slide">
                {move || view! { <ReviewCard review=current() /> }}
            </div>
            <button
                class="carousel-nav"
                aria-label="Next review"
                on:click=move |_| carousel.update(|c| {
                    c.advance();
                })
            >
                <Svg path=ICON_CHEVRON_RIGHT />
            </button>
        </div>
        <div class="carousel-dots">
            {(0..reviews.len())
                .map(|i| {
                    view! {
                        <button
                            class="carousel-dot"
                            class:active=move || carousel.with(|c| c.is_active(i))
                            aria-label=format!("Show review {}", i + 1)
                            on:click=move |_| carousel.update(|c| {
                                c.select(i);
                            })
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ReviewCard(review: &'static Review) -> impl IntoView {
    view! {
        <article class="card review-card">
            <Stars rating=review.rating />
            <blockquote class="review-text">"\u{201c}" {review.text.as_str()} "\u{201d}"</blockquote>
            <footer class="review-author">
                <span class="avatar">{review.initial()}</span>
                <div>
                    <p class="review-name">
                        {review.name.as_str()}
                        {review.verified.then(|| view! {
                            <span class="verified" title="Verified client">
                                <Svg path=ICON_BADGE_CHECK size="16" />
                            </span>
                        })}
                    </p>
                    <p class="review-role">
                        {review.role.as_str()} ", " {review.company.as_str()}
                    </p>
                </div>
                <span class="tag">{service_label(&review.service)}</span>
            </footer>
        </article>
    }
}

/// Five stars, the first `rating` of them filled.
#[component]
pub fn Stars(rating: Rating) -> impl IntoView {
    let filled = usize::from(rating.get());
    view! { <StarRow filled=filled /> }
}

#[component]
pub fn StarRow(filled: usize) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{filled} out of 5 stars")>
            {(0..usize::from(Rating::MAX))
                .map(|i| {
                    let class = if i < filled { "star filled" } else { "star" };
                    view! { <Svg path=ICON_STAR size="18" class=class /> }
                })
                .collect_view()}
        </span>
    }
}
