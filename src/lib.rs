//! Static résumé page, rendered client-side with Yew.
//!
//! One stateless page component, no routing, no data fetching. The only
//! interactive element is the download button, which hands off to the
//! browser's print dialog.

mod app;
mod components;
pub mod content;

pub use app::ResumePage;
