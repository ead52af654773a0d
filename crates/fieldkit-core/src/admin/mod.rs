//! Admin integration: form field sets, changelist columns and the site
//! registry they reverse URLs against

pub mod fieldsets;
pub mod list_display;
pub mod log_entry;
pub mod relation_count;
pub mod relation_list;
pub mod site;
pub mod sparkline;
pub mod templates;
pub mod view_on_site;

pub use fieldsets::{
    flatten_fieldsets, Fieldset, CHANGETRACKING_FIELDSET, CHANGETRACKING_READONLYS,
    DATE_PUBLISHING_FIELDSET, PUBLISHING_FIELDSET, SEO_FIELDSET, TITLES_FIELDSET,
};
pub use list_display::{render_changelist, AdminContext, Changelist, ListDisplay};
pub use log_entry::{ActionFlag, LogEntry, LogEntryStore};
pub use relation_count::RelationCount;
pub use relation_list::RelationList;
pub use site::AdminSite;
pub use sparkline::{LogEntrySparkline, SparkBar};
pub use view_on_site::ViewOnSite;
