use yew::prelude::*;

use crate::components::{ContentArea, Sidebar};

/// The whole page: sidebar on one side, content area on the other.
/// Stateless, so rendering it twice yields identical markup.
#[function_component(ResumePage)]
pub fn resume_page() -> Html {
    html! {
        <main class="resume">
            <Sidebar />
            <ContentArea />
        </main>
    }
}
