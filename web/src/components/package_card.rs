use leptos::prelude::*;
use shared_types::TourPackage;

/// Summary card for a tour package. `children` renders the card's action.
#[component]
pub fn PackageCard(package: TourPackage, children: Children) -> impl IntoView {
    let TourPackage {
        name,
        location,
        description,
        image_url,
        ..
    } = package.clone();

    view! {
        <div class="package-card">
            {image_url.map(|src| {
                view! { <img class="package-card-image" src=src alt=name.clone()/> }
            })}
            <div class="package-card-body">
                <p class="package-card-location">{location}</p>
                <h2 class="package-card-title">{name}</h2>
                <p class="package-card-meta">
                    {format!("{} • {}", package.duration_label(), package.pax_label())}
                </p>
                <p class="package-card-price">
                    {package.price_label()}
                    <span class="package-card-price-unit">" / per head"</span>
                </p>
                {description.map(|text| view! { <p class="package-card-description">{text}</p> })}
                <div class="package-card-details">
                    {package
                        .detail_sections()
                        .into_iter()
                        .map(|(title, items)| {
                            view! {
                                <div class="package-card-detail">
                                    <h4 class="package-card-detail-title">{title}</h4>
                                    <ul class="package-card-detail-list">
                                        {items
                                            .iter()
                                            .map(|item| view! { <li>{item.clone()}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="package-card-action">{children()}</div>
            </div>
        </div>
    }
}
