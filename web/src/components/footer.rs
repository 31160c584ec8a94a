use chrono::Datelike;
use leptos::prelude::*;

use super::navbar::SITE_NAME;
use crate::server::get_today;

#[component]
pub fn Footer() -> impl IntoView {
    let today = Resource::new(|| (), |_| async move { get_today().await });

    view! {
        <footer class="footer">
            <h3 class="footer__title">{SITE_NAME}</h3>
            <p class="footer__tagline">
                "Your tropical escape awaits. Book your next adventure today."
            </p>
            <p class="footer__copyright">
                <Suspense fallback=|| ()>
                    {move || {
                        today
                            .get()
                            .and_then(Result::ok)
                            .map(|date| format!("© {} {}. ", date.year(), SITE_NAME))
                    }}
                </Suspense>
                "All rights reserved."
            </p>
        </footer>
    }
}
