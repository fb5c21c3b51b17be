//! Item Card Component

use leptos::prelude::*;

use crate::models::Card;

/// One catalog entry: sprite, name and type line
#[component]
pub fn ItemCard(card: Card) -> impl IntoView {
    let Card { image, title, caption } = card;

    view! {
        <div class="col-md-4 mb-4">
            <div class="card">
                <img src=image class="card-img-top" alt=title.clone() />
                <div class="card-body">
                    <h5>{title}</h5>
                    <p>{caption}</p>
                </div>
            </div>
        </div>
    }
}
