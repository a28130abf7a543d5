mod content_area;
mod sidebar;

pub use content_area::ContentArea;
pub use sidebar::Sidebar;
