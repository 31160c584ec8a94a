use leptos::prelude::*;
use leptos_router::components::A;

pub const SITE_NAME: &str = "Palawan Adventures";

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__links">
                    <A href="/" attr:class="navbar__link">
                        "Home"
                    </A>
                    <A href="/booking" attr:class="navbar__link">
                        "Tours"
                    </A>
                </div>

                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        {SITE_NAME}
                    </A>
                </div>

                <A href="/booking" attr:class="navbar__link navbar__link--cta">
                    "Book Now"
                </A>
            </div>
        </nav>
    }
}
