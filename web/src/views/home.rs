use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::{filter_packages, locations, LocationFilter};
use thaw::*;

use crate::components::{error::ErrorView, loading::LoadingView, package_card::PackageCard};
use crate::server::get_tour_packages;

#[component]
pub fn HomePage() -> impl IntoView {
    let packages = Resource::new(|| (), |_| async move { get_tour_packages().await });
    let filter = RwSignal::new(LocationFilter::All);

    view! {
        <div class="homepage-container">
            <section class="homepage-hero">
                <h1 class="homepage-hero__title">"Explore Palawan"</h1>
                <p class="homepage-hero__subtitle">
                    "Island camps, lagoons and sandbars, planned end to end."
                </p>
                <A href="/booking" attr:class="homepage-hero__cta">
                    "Book Your Experience"
                </A>
            </section>

            <section class="homepage-packages">
                <h2 class="homepage-section-title">"Our most popular tour packages"</h2>

                <Suspense fallback=move || view! { <LoadingView message=None/> }>
                    {move || {
                        match packages.get() {
                            None => view! {}.into_any(),
                            Some(Err(e)) => {
                                leptos::logging::error!("Failed to load packages: {}", e);
                                view! {
                                    <ErrorView message=Some("We couldn't load our tours right now.".to_string())/>
                                }
                                    .into_any()
                            }
                            Some(Ok(all)) => {
                                let mut labels = vec![LocationFilter::ALL_LABEL.to_string()];
                                labels.extend(locations(&all));

                                view! {
                                    <div class="homepage-filters">
                                        {labels
                                            .into_iter()
                                            .map(|label| {
                                                let option = LocationFilter::from_label(&label);
                                                let is_active = {
                                                    let option = option.clone();
                                                    move || filter.get() == option
                                                };
                                                view! {
                                                    <Button
                                                        class="homepage-filter"
                                                        appearance=Signal::derive(move || {
                                                            if is_active() {
                                                                ButtonAppearance::Primary
                                                            } else {
                                                                ButtonAppearance::Secondary
                                                            }
                                                        })
                                                        on_click=move |_| filter.set(option.clone())
                                                    >
                                                        {label}
                                                    </Button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>

                                    <div class="homepage-package-grid">
                                        {move || {
                                            let active = filter.get();
                                            let visible = filter_packages(&all, &active);
                                            if visible.is_empty() {
                                                view! {
                                                    <p class="homepage-empty">
                                                        {format!("No packages found for {}.", active.label())}
                                                    </p>
                                                }
                                                    .into_any()
                                            } else {
                                                visible
                                                    .into_iter()
                                                    .cloned()
                                                    .map(|package| {
                                                        let href = format!("/booking?package={}", package.id);
                                                        view! {
                                                            <PackageCard package=package>
                                                                <A href=href attr:class="package-card-button">
                                                                    "Book this tour"
                                                                </A>
                                                            </PackageCard>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                                    .into_any()
                                            }
                                        }}
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    }}
                </Suspense>
            </section>
        </div>
    }
}
