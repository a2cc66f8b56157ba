pub mod app;
pub mod dashboard;
pub mod dialog;
pub mod dialog_context;
pub mod entity_detail;
pub mod listing_hooks;
pub mod listing_panel;
pub mod navbar;
pub mod not_found;
pub mod page_meta;
pub mod pagination;
pub mod report_stats;
pub mod search_form;
pub mod section_page;

pub use app::App;
pub use dashboard::Dashboard;
pub use dialog::GlobalDialog;
pub use dialog_context::DialogContext;
pub use entity_detail::EntityDetailPage;
pub use listing_hooks::{use_listing, ListingHandle};
pub use listing_panel::ListingPanel;
pub use navbar::AdminLayout;
pub use not_found::NotFound;
pub use page_meta::PageMeta;
pub use pagination::Pagination;
pub use report_stats::ReportStatsPanel;
pub use search_form::SearchForm;
pub use section_page::SectionPage;
