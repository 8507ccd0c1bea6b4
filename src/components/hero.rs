//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"PetScan - Cat or Dog?"</h1>
            <p class="subtitle">
                "Drop in a photo and the neural network will tell you which pet it sees, "
                "with a confidence score for its call."
            </p>
        </div>
    }
}
