use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-container">
            <div class="not-found-card">
                <div class="not-found-code">"404"</div>
                <h1 class="not-found-title">"Page Not Found"</h1>
                <p class="not-found-text">
                    "Looks like this page drifted out to sea. It doesn't exist or may have been moved."
                </p>
                <div class="not-found-actions">
                    <A href="/" attr:class="not-found-btn-primary">"🏝️ Go Home"</A>
                    <A href="/booking" attr:class="not-found-btn-secondary">"📅 Book a Tour"</A>
                </div>
            </div>
        </div>
    }
}
