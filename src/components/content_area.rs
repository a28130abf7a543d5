use yew::prelude::*;

use crate::content;

/// Header plus the about / experience / interests sections.
#[function_component(ContentArea)]
pub fn content_area() -> Html {
    html! {
        <div class="content-area">
            <header class="header">
                <div class="header-text">
                    <h1>{ content::NAME }</h1>
                    <h2>{ content::TITLE }</h2>
                    <p>{ content::TAGLINE }</p>
                </div>

                <div class="profile-box">
                    <span>{ "محل عکس پروفایل" }</span>
                </div>
            </header>

            <section class="section">
                <h3>{ "درباره من" }</h3>
                <p>{ content::ABOUT }</p>
            </section>

            <section class="section">
                <h3>{ "تجربه کاری و پروژه‌ها" }</h3>
                <ul>
                    { for content::EXPERIENCE.iter().map(|e| html! { <li>{ *e }</li> }) }
                </ul>
            </section>

            <section class="section">
                <h3>{ "علایق و فعالیت‌ها" }</h3>
                <ul>
                    { for content::INTERESTS.iter().map(|i| html! { <li>{ *i }</li> }) }
                </ul>
            </section>
        </div>
    }
}
