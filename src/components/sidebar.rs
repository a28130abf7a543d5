use web_sys::window;
use yew::prelude::*;

use crate::content;

fn print_page() -> Result<(), String> {
    let win = window().ok_or("No window available")?;
    win.print().map_err(|_| "Print dialog unavailable".to_string())
}

/// Contact details, skills, credentials, and the print trigger.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    // "Download as PDF" is just the browser's print dialog; whether a PDF
    // comes out the other end is up to the host.
    let on_print = Callback::from(|_: MouseEvent| {
        let _ = print_page();
    });

    html! {
        <aside class="sidebar">
            <div class="sidebar-section">
                <h2 class="sidebar-title">{ "اطلاعات تماس" }</h2>
                <p>{ format!("📧 {}", content::CONTACT.email) }</p>
                <p>{ format!("📱 {}", content::CONTACT.phone) }</p>
                <p>
                    { "💼 لینکدین: " }
                    <a href="#" target="_blank" rel="noreferrer">{ content::CONTACT.linkedin_label }</a>
                </p>
                <p>
                    { "💻 گیت‌هاب: " }
                    <a href="#" target="_blank" rel="noreferrer">{ content::CONTACT.github_label }</a>
                </p>
                <p>{ content::CONTACT.location }</p>
            </div>

            <div class="sidebar-section">
                <h2 class="sidebar-title">{ "مهارت‌های کلیدی" }</h2>
                <ul>
                    { for content::SKILLS.iter().map(|s| html! { <li>{ *s }</li> }) }
                </ul>
            </div>

            <div class="sidebar-section">
                <h2 class="sidebar-title">{ "مدارک" }</h2>
                <ul>
                    { for content::CREDENTIALS.iter().map(|c| html! { <li>{ *c }</li> }) }
                </ul>
            </div>

            <div>
                <button class="download-btn" onclick={on_print}>
                    { "دانلود این صفحه (PDF)" }
                </button>
            </div>
        </aside>
    }
}
