use chrono::{DateTime, TimeZone, Utc};
use fieldkit_core::admin::{AdminSite, LogEntryStore};
use fieldkit_core::model::{
    ChangeTracking, ContentTypeRegistry, DatePublishing, HasChangeTracking, HasDatePublishing,
    HasPublishing, HasPublishingFlag, HasRelations, HasSeo, HasSoftDelete, HasTitles, ModelMeta,
    Publishing, Record, RecordId, Relation, Seo, SoftDelete, Titles,
};
use fieldkit_core::Settings;

/// Fixed request time used across scenarios
#[allow(dead_code)]
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 20, 12, 0, 0).unwrap()
}

/// A page composing every mixin
#[derive(Debug, Clone)]
pub struct Page {
    pub id: Option<RecordId>,
    pub slug: Option<String>,
    pub titles: Titles,
    pub seo: Seo,
    pub changes: ChangeTracking,
    pub window: DatePublishing,
    pub state: SoftDelete,
}

impl Page {
    #[allow(dead_code)]
    pub fn new(title: &str) -> Self {
        Self {
            id: None,
            slug: None,
            titles: Titles::new(title).unwrap(),
            seo: Seo::default(),
            changes: ChangeTracking::new(),
            window: DatePublishing::starting(now()),
            state: SoftDelete::default(),
        }
    }

    #[allow(dead_code)]
    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    #[allow(dead_code)]
    pub fn with_window(mut self, window: DatePublishing) -> Self {
        self.window = window;
        self
    }
}

impl Record for Page {
    const META: ModelMeta = ModelMeta::new("pages", "page", "Page", "page", "pages");

    fn pk(&self) -> Option<RecordId> {
        self.id
    }

    fn set_pk(&mut self, pk: RecordId) {
        self.id = Some(pk);
    }

    fn label(&self) -> String {
        self.titles.title.clone()
    }

    fn absolute_url(&self) -> Option<String> {
        self.slug.as_ref().map(|slug| format!("/{}/", slug))
    }

    fn on_save(&mut self, now: DateTime<Utc>) {
        self.changes.touch(now);
    }
}

impl HasTitles for Page {
    fn titles(&self) -> &Titles {
        &self.titles
    }
}

impl HasSeo for Page {
    fn seo(&self) -> &Seo {
        &self.seo
    }
}

impl HasChangeTracking for Page {
    fn change_tracking(&self) -> &ChangeTracking {
        &self.changes
    }

    fn change_tracking_mut(&mut self) -> &mut ChangeTracking {
        &mut self.changes
    }
}

impl HasDatePublishing for Page {
    fn date_publishing(&self) -> &DatePublishing {
        &self.window
    }

    fn date_publishing_mut(&mut self) -> &mut DatePublishing {
        &mut self.window
    }
}

impl HasSoftDelete for Page {
    fn soft_delete(&self) -> &SoftDelete {
        &self.state
    }

    fn soft_delete_mut(&mut self) -> &mut SoftDelete {
        &mut self.state
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Option<RecordId>,
    pub name: String,
}

impl Record for Category {
    const META: ModelMeta =
        ModelMeta::new("blog", "category", "Category", "category", "categories");

    fn pk(&self) -> Option<RecordId> {
        self.id
    }

    fn set_pk(&mut self, pk: RecordId) {
        self.id = Some(pk);
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: Option<RecordId>,
    pub name: String,
}

impl Record for Tag {
    const META: ModelMeta = ModelMeta::new("blog", "tag", "Tag", "tag", "tags");

    fn pk(&self) -> Option<RecordId> {
        self.id
    }

    fn set_pk(&mut self, pk: RecordId) {
        self.id = Some(pk);
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// An article with a flag-published state and two relations
#[derive(Debug, Clone)]
pub struct Article {
    pub id: Option<RecordId>,
    pub title: String,
    pub flag: Publishing,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

impl Article {
    #[allow(dead_code)]
    pub fn new(title: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            flag: Publishing::default(),
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl Record for Article {
    const META: ModelMeta = ModelMeta::new("blog", "article", "Article", "article", "articles");

    fn pk(&self) -> Option<RecordId> {
        self.id
    }

    fn set_pk(&mut self, pk: RecordId) {
        self.id = Some(pk);
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl HasRelations for Article {
    fn relation(&self, accessor: &str) -> Option<Relation> {
        match accessor {
            "categories" => Some(Relation::from_records(&self.categories)),
            "tags" => Some(Relation::from_records(&self.tags)),
            _ => None,
        }
    }
}

impl HasPublishingFlag for Article {
    fn publishing(&self) -> &Publishing {
        &self.flag
    }

    fn publishing_mut(&mut self) -> &mut Publishing {
        &mut self.flag
    }
}

impl HasPublishing for Article {
    fn is_published_at(&self, _now: DateTime<Utc>) -> bool {
        self.flag.is_published
    }
}

/// `count` saved categories with keys 1..=count
#[allow(dead_code)]
pub fn categories(count: u64) -> Vec<Category> {
    (1..=count)
        .map(|pk| Category {
            id: Some(RecordId(pk)),
            name: format!("Category {}", pk),
        })
        .collect()
}

/// Admin wiring shared by the display scenarios
#[allow(dead_code)]
pub struct AdminFixture {
    pub settings: Settings,
    pub site: AdminSite,
    pub content_types: ContentTypeRegistry,
    pub log_entries: LogEntryStore,
}

impl AdminFixture {
    /// Site with pages, articles and categories mounted; tags are not
    #[allow(dead_code)]
    pub fn new() -> Self {
        let settings = Settings::default();
        let mut site = AdminSite::from_settings(&settings);
        site.register::<Page>()
            .register::<Article>()
            .register::<Category>();

        let mut content_types = ContentTypeRegistry::new();
        content_types.register::<Page>();
        content_types.register::<Article>();
        content_types.register::<Category>();

        Self {
            settings,
            site,
            content_types,
            log_entries: LogEntryStore::new(),
        }
    }
}
