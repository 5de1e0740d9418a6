//! Top-level shell.
//!
//! Composes the router's output with the fetched collections: the current
//! [`RouteState`] selects which view mounts, public views render live data
//! only, and the admin dashboard owns one draft controller per editable
//! collection. Editors are fully independent — saving one while another is
//! dirty involves no ordering or coupling, and no editor's failure crosses
//! into another.

use std::sync::Arc;

use crate::draft::{DraftCollection, SeedOutcome};
use crate::errors::AppError;
use crate::models::{
    CarouselItem, HomeWidgetConfig, InfoCard, MenuItem, Notice, Page, Session, SidebarKind,
    SidebarSection, SiteSettings,
};
use crate::router::{NavigationHost, Navigator, PageName, RouteState};
use crate::search::{search_site, SearchHit};
use crate::store::{self, CollectionKind, CollectionStore};

/// Default number of results shown on the search page.
const SEARCH_LIMIT: usize = 20;

/// Which top-level view mounts for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    Terms,
    Privacy,
    ForgotPassword,
    Chairman,
    NoticeDetail { id: String },
    NewsDetail { id: String },
    SearchResults { query: String },
    AllNotices,
    AllNews,
    AdminDashboard,
    PageViewer { slug: String },
}

/// The view-selection switch: route in, mounted view out.
///
/// The admin dashboard is gated on a session; without one the login view
/// mounts in its place.
pub fn view_for(route: &RouteState, signed_in: bool) -> View {
    match route.page {
        PageName::Home => View::Home,
        PageName::Login => View::Login,
        PageName::Register => View::Register,
        PageName::Terms => View::Terms,
        PageName::Privacy => View::Privacy,
        PageName::ForgotPassword => View::ForgotPassword,
        PageName::Chairman => View::Chairman,
        PageName::Notice => View::NoticeDetail {
            id: route.id.clone(),
        },
        PageName::News => View::NewsDetail {
            id: route.id.clone(),
        },
        PageName::Search => View::SearchResults {
            query: route.query.clone(),
        },
        PageName::AllNotices => View::AllNotices,
        PageName::AllNews => View::AllNews,
        PageName::AdminDashboard => {
            if signed_in {
                View::AdminDashboard
            } else {
                View::Login
            }
        }
        PageName::PageViewer => View::PageViewer {
            slug: route.slug.clone(),
        },
    }
}

/// The live collections as last fetched from the backing store.
///
/// This is the only data public views ever see; drafts stay inside the
/// admin dashboard until committed.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub notices: Vec<Notice>,
    pub news: Vec<Notice>,
    pub pages: Vec<Page>,
    pub carousel: Vec<CarouselItem>,
    pub home_widgets: Vec<HomeWidgetConfig>,
    pub info_cards: Vec<InfoCard>,
    pub menu: Vec<MenuItem>,
    pub sidebar: Vec<SidebarSection>,
    pub settings: SiteSettings,
}

impl SiteContent {
    /// Fetch every collection from the store.
    pub async fn load(store: &dyn CollectionStore) -> Result<Self, AppError> {
        Ok(Self {
            notices: store::fetch(store, CollectionKind::Notices).await?,
            news: store::fetch(store, CollectionKind::News).await?,
            pages: store::fetch(store, CollectionKind::Pages).await?,
            carousel: store::fetch(store, CollectionKind::Carousel).await?,
            home_widgets: store::fetch(store, CollectionKind::HomeWidgets).await?,
            info_cards: store::fetch(store, CollectionKind::InfoCards).await?,
            menu: store::fetch(store, CollectionKind::Menu).await?,
            sidebar: store::fetch(store, CollectionKind::Sidebar).await?,
            settings: store::fetch::<SiteSettings>(store, CollectionKind::Settings)
                .await?
                .into_iter()
                .next()
                .unwrap_or_default(),
        })
    }

    pub fn notice_by_id(&self, id: &str) -> Option<&Notice> {
        self.notices.iter().find(|n| n.id == id)
    }

    pub fn news_by_id(&self, id: &str) -> Option<&Notice> {
        self.news.iter().find(|n| n.id == id)
    }

    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }
}

/// One draft controller per editable collection.
///
/// Every editor follows the same optimistic-local-edit, explicit-commit
/// workflow; the per-collection save methods all push the whole draft
/// through the store's replace-all.
pub struct AdminDashboard {
    store: Arc<dyn CollectionStore>,
    pub notices: DraftCollection<Notice>,
    pub news: DraftCollection<Notice>,
    pub pages: DraftCollection<Page>,
    pub carousel: DraftCollection<CarouselItem>,
    pub home_widgets: DraftCollection<HomeWidgetConfig>,
    pub info_cards: DraftCollection<InfoCard>,
    pub menu: DraftCollection<MenuItem>,
    pub sidebar: DraftCollection<SidebarSection>,
    pub settings: DraftCollection<SiteSettings>,
}

impl AdminDashboard {
    /// Mount the dashboard, seeding every editor from the current live
    /// content.
    pub fn new(store: Arc<dyn CollectionStore>, content: &SiteContent) -> Self {
        Self {
            store,
            notices: DraftCollection::seeded(content.notices.clone()),
            news: DraftCollection::seeded(content.news.clone()),
            pages: DraftCollection::seeded(content.pages.clone()),
            carousel: DraftCollection::seeded(content.carousel.clone()),
            home_widgets: DraftCollection::seeded(content.home_widgets.clone()),
            info_cards: DraftCollection::seeded(content.info_cards.clone()),
            menu: DraftCollection::seeded(content.menu.clone()),
            sidebar: DraftCollection::seeded(content.sidebar.clone()),
            settings: DraftCollection::seeded(vec![content.settings.clone()]),
        }
    }

    /// Re-seed every editor after the authoritative content changed.
    /// Editors with unsaved edits keep their drafts; each such conflict is
    /// logged so the divergence is at least visible in the session log.
    pub fn reseed(&mut self, content: &SiteContent) {
        let outcomes = [
            ("notices", self.notices.seed(content.notices.clone())),
            ("news", self.news.seed(content.news.clone())),
            ("pages", self.pages.seed(content.pages.clone())),
            ("carousel", self.carousel.seed(content.carousel.clone())),
            (
                "home-widgets",
                self.home_widgets.seed(content.home_widgets.clone()),
            ),
            ("info-cards", self.info_cards.seed(content.info_cards.clone())),
            ("menu", self.menu.seed(content.menu.clone())),
            ("sidebar", self.sidebar.seed(content.sidebar.clone())),
            ("settings", self.settings.seed(vec![content.settings.clone()])),
        ];
        for (name, outcome) in outcomes {
            if outcome == SeedOutcome::KeptDirtyDraft {
                tracing::warn!(
                    "{} changed upstream while the editor has unsaved edits; keeping the local draft",
                    name
                );
            }
        }
    }

    pub async fn save_notices(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.notices, CollectionKind::Notices).await
    }

    pub async fn save_news(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.news, CollectionKind::News).await
    }

    pub async fn save_pages(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.pages, CollectionKind::Pages).await
    }

    pub async fn save_carousel(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.carousel, CollectionKind::Carousel).await
    }

    pub async fn save_home_widgets(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.home_widgets, CollectionKind::HomeWidgets).await
    }

    pub async fn save_info_cards(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.info_cards, CollectionKind::InfoCards).await
    }

    pub async fn save_menu(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.menu, CollectionKind::Menu).await
    }

    pub async fn save_sidebar(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.sidebar, CollectionKind::Sidebar).await
    }

    pub async fn save_settings(&mut self) -> Result<(), AppError> {
        save(&self.store, &mut self.settings, CollectionKind::Settings).await
    }

    /// Switch a sidebar section's type; its payload is replaced with the
    /// new type's default shape in the same write.
    pub fn change_sidebar_kind(&mut self, index: usize, kind: SidebarKind) {
        self.sidebar.mutate_item(index, |section| section.set_kind(kind));
    }

    /// Remove a root menu entry. Children live nested inside the parent
    /// record, so they are deleted with it — never promoted to roots.
    pub fn remove_root_menu_item(&mut self, index: usize) {
        self.menu.remove_item(index);
    }

    /// Append a child under a root menu entry.
    pub fn add_menu_child(&mut self, parent_index: usize, child: MenuItem) {
        self.menu
            .mutate_item(parent_index, |parent| parent.children.push(child));
    }

    /// Remove a child of a root menu entry by position.
    pub fn remove_menu_child(&mut self, parent_index: usize, child_index: usize) {
        self.menu.mutate_item(parent_index, |parent| {
            if child_index < parent.children.len() {
                parent.children.remove(child_index);
            }
        });
    }
}

/// Commit one editor's draft through the store's replace-all.
async fn save<T: serde::Serialize + Clone>(
    store: &Arc<dyn CollectionStore>,
    editor: &mut DraftCollection<T>,
    kind: CollectionKind,
) -> Result<(), AppError> {
    let store = Arc::clone(store);
    editor
        .commit(move |items| async move { store::replace(store.as_ref(), kind, &items).await })
        .await
}

/// The application shell: route state, live content, and (when mounted)
/// the admin dashboard.
pub struct Shell {
    store: Arc<dyn CollectionStore>,
    navigator: Navigator,
    content: SiteContent,
    session: Option<Session>,
    admin: Option<AdminDashboard>,
}

impl Shell {
    /// Boot the shell: decode the initial fragment and fetch all content.
    pub async fn boot(
        store: Arc<dyn CollectionStore>,
        host: Box<dyn NavigationHost>,
        initial_fragment: &str,
    ) -> Result<Self, AppError> {
        let content = SiteContent::load(store.as_ref()).await?;
        Ok(Self {
            store,
            navigator: Navigator::new(host, initial_fragment),
            content,
            session: None,
            admin: None,
        })
    }

    pub fn route(&self) -> &RouteState {
        self.navigator.current()
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// The view currently mounted.
    pub fn view(&self) -> View {
        view_for(self.navigator.current(), self.session.is_some())
    }

    /// In-app navigation (menu clicks, card links): writes the hash.
    pub fn navigate(&mut self, route: RouteState) {
        self.navigator.navigate(route, true);
    }

    /// Browser-initiated fragment change (typed URL, back/forward).
    pub fn on_fragment_change(&mut self, fragment: &str) {
        self.navigator.on_fragment_change(fragment);
    }

    /// Record a session obtained from the hosted auth service.
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        // Admin state is torn down with the session.
        self.admin = None;
    }

    /// Mount (or return the already-mounted) admin dashboard.
    pub fn admin(&mut self) -> Option<&mut AdminDashboard> {
        if self.session.is_none() {
            return None;
        }
        if self.admin.is_none() {
            self.admin = Some(AdminDashboard::new(Arc::clone(&self.store), &self.content));
        }
        self.admin.as_mut()
    }

    /// Re-fetch every collection and re-seed the mounted editors.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.content = SiteContent::load(self.store.as_ref()).await?;
        if let Some(admin) = &mut self.admin {
            admin.reseed(&self.content);
        }
        Ok(())
    }

    /// Search the live content for the search page.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        search_site(
            query,
            &self.content.notices,
            &self.content.news,
            &self.content.pages,
            SEARCH_LIMIT,
        )
    }
}
