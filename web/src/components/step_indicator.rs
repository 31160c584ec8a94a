use leptos::prelude::*;
use shared_types::BookingStep;

#[component]
pub fn StepIndicator(#[prop(into)] current: Signal<BookingStep>) -> impl IntoView {
    view! {
        <div class="booking-steps">
            {BookingStep::ALL
                .into_iter()
                .map(|step| {
                    view! {
                        <span class="booking-step" class:active=move || current.get() == step>
                            {format!("Step {}: {}", step.number(), step.label())}
                        </span>
                        {(step != BookingStep::Payment)
                            .then(|| view! { <span class="booking-step-arrow">"→"</span> })}
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
