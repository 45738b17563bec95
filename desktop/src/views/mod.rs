mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod add_record;
pub use add_record::AddRecord;

mod archive;
pub use archive::Archive;

mod record_detail;
pub use record_detail::RecordDetail;

mod settings;
pub use settings::Settings;
