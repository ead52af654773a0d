//! Record mixins
//!
//! Each mixin is a value struct embedded in a concrete record type plus a
//! capability trait exposing it. A record composes whichever bundles it needs:
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use fieldkit_core::model::{
//!     ChangeTracking, HasChangeTracking, HasTitles, ModelMeta, Record, RecordId, Titles,
//! };
//!
//! struct Page {
//!     id: Option<RecordId>,
//!     titles: Titles,
//!     changes: ChangeTracking,
//! }
//!
//! impl Record for Page {
//!     const META: ModelMeta = ModelMeta::new("pages", "page", "Page", "page", "pages");
//!
//!     fn pk(&self) -> Option<RecordId> {
//!         self.id
//!     }
//!
//!     fn set_pk(&mut self, pk: RecordId) {
//!         self.id = Some(pk);
//!     }
//!
//!     fn label(&self) -> String {
//!         self.titles.title.clone()
//!     }
//!
//!     fn on_save(&mut self, now: DateTime<Utc>) {
//!         self.changes.touch(now);
//!     }
//! }
//!
//! impl HasTitles for Page {
//!     fn titles(&self) -> &Titles {
//!         &self.titles
//!     }
//! }
//!
//! impl HasChangeTracking for Page {
//!     fn change_tracking(&self) -> &ChangeTracking {
//!         &self.changes
//!     }
//!
//!     fn change_tracking_mut(&mut self) -> &mut ChangeTracking {
//!         &mut self.changes
//!     }
//! }
//! ```

pub mod change_tracking;
pub mod date_publishing;
pub mod generic;
pub mod publishing;
pub mod record;
pub mod seo;
pub mod soft_delete;
pub mod titles;

pub use change_tracking::{ChangeTracking, HasChangeTracking, RecencyWindow};
pub use date_publishing::{DatePublishing, HasDatePublishing};
pub use generic::{ContentType, ContentTypeId, ContentTypeRegistry, Generic, HasGeneric};
pub use publishing::{HasPublishing, HasPublishingFlag, Publishing};
pub use record::{HasRelations, ModelMeta, Record, RecordId, RelatedObject, Relation};
pub use seo::{HasSeo, Seo};
pub use soft_delete::{DeletedState, HasSoftDelete, SoftDelete};
pub use titles::{HasTitles, Titles};
