//! Hash-fragment router.
//!
//! The address-bar fragment is the only deep-linking mechanism the site has:
//! the document never reloads, so `#<page>[?id=..&title=..&q=..&slug=..]`
//! carries the whole navigation state. This module owns the bidirectional
//! mapping between fragments and [`RouteState`] values and the side effects
//! of a route change (scroll reset, address-bar write).

/// The closed set of top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageName {
    Home,
    Login,
    Register,
    Terms,
    Privacy,
    ForgotPassword,
    Chairman,
    Notice,
    News,
    Search,
    AllNotices,
    AllNews,
    AdminDashboard,
    PageViewer,
}

impl PageName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageName::Home => "home",
            PageName::Login => "login",
            PageName::Register => "register",
            PageName::Terms => "terms",
            PageName::Privacy => "privacy",
            PageName::ForgotPassword => "forgot-password",
            PageName::Chairman => "chairman",
            PageName::Notice => "notice",
            PageName::News => "news",
            PageName::Search => "search",
            PageName::AllNotices => "all-notices",
            PageName::AllNews => "all-news",
            PageName::AdminDashboard => "admin-dashboard",
            PageName::PageViewer => "page-viewer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(PageName::Home),
            "login" => Some(PageName::Login),
            "register" => Some(PageName::Register),
            "terms" => Some(PageName::Terms),
            "privacy" => Some(PageName::Privacy),
            "forgot-password" => Some(PageName::ForgotPassword),
            "chairman" => Some(PageName::Chairman),
            "notice" => Some(PageName::Notice),
            "news" => Some(PageName::News),
            "search" => Some(PageName::Search),
            "all-notices" => Some(PageName::AllNotices),
            "all-news" => Some(PageName::AllNews),
            "admin-dashboard" => Some(PageName::AdminDashboard),
            "page-viewer" => Some(PageName::PageViewer),
            _ => None,
        }
    }
}

/// Immutable snapshot of the navigation state.
///
/// A new value replaces the old one on every navigation; the optional
/// parameters default to the empty string when absent from the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    pub page: PageName,
    pub id: String,
    pub title: String,
    pub query: String,
    pub slug: String,
}

impl RouteState {
    /// Route to a page with no parameters.
    pub fn to(page: PageName) -> Self {
        Self {
            page,
            id: String::new(),
            title: String::new(),
            query: String::new(),
            slug: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::to(PageName::Home)
    }
}

/// Serialize a route to a fragment string (without the leading `#`).
///
/// Non-empty parameters are appended as query pairs in the fixed order
/// id, title, q, slug; the `?` is omitted entirely when every parameter
/// is empty. Decode is order-tolerant, so the order only has to be stable.
pub fn encode(route: &RouteState) -> String {
    let mut fragment = route.page.as_str().to_string();

    let params = [
        ("id", &route.id),
        ("title", &route.title),
        ("q", &route.query),
        ("slug", &route.slug),
    ];

    let mut first = true;
    for (key, value) in params {
        if value.is_empty() {
            continue;
        }
        fragment.push(if first { '?' } else { '&' });
        first = false;
        fragment.push_str(key);
        fragment.push('=');
        fragment.push_str(&urlencoding::encode(value));
    }

    fragment
}

/// Parse a fragment string (with or without the leading `#`) into a route.
///
/// The portion before the first `?` is the page name; the rest is parsed as
/// ordinary query parameters into the four known fields, each defaulting to
/// the empty string. An empty fragment is the home page, and so is an
/// unrecognized page name: rendering a blank main area for a mistyped
/// bookmark helps nobody, so unknown names fall back to `home`.
pub fn decode(fragment: &str) -> RouteState {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    let (name, tail) = match fragment.split_once('?') {
        Some((name, tail)) => (name, Some(tail)),
        None => (fragment, None),
    };

    let page = PageName::parse(name).unwrap_or(PageName::Home);
    let mut route = RouteState::to(page);

    if let Some(tail) = tail {
        for pair in tail.split('&') {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            match key {
                "id" => route.id = value,
                "title" => route.title = value,
                "q" => route.query = value,
                "slug" => route.slug = value,
                _ => {}
            }
        }
    }

    route
}

/// Side effects of a route change, injected so the core stays headless.
///
/// The browser shell scrolls the window and writes `location.hash`; tests
/// record the calls instead.
pub trait NavigationHost: Send + Sync {
    fn scroll_to_top(&self);
    fn write_fragment(&self, fragment: &str);
}

/// Process-wide navigation state: one current route for the life of the
/// page load, written only by [`Navigator::navigate`] and the fragment
/// listener, read by the view-selection logic.
pub struct Navigator {
    current: RouteState,
    host: Box<dyn NavigationHost>,
}

impl Navigator {
    /// Start at the route the initial fragment decodes to.
    pub fn new(host: Box<dyn NavigationHost>, initial_fragment: &str) -> Self {
        Self {
            current: decode(initial_fragment),
            host,
        }
    }

    pub fn current(&self) -> &RouteState {
        &self.current
    }

    /// Apply a route change: replace the in-memory state synchronously,
    /// reset scroll, and write the encoded fragment to the address bar only
    /// when `update_hash` is set.
    ///
    /// A hash write makes the browser fire an asynchronous fragment-change
    /// event that re-enters [`Navigator::on_fragment_change`]; applying an
    /// equivalent route twice is harmless, which is what makes that loop
    /// safe.
    pub fn navigate(&mut self, route: RouteState, update_hash: bool) {
        self.current = route;
        self.host.scroll_to_top();
        if update_hash {
            self.host.write_fragment(&encode(&self.current));
        }
    }

    /// Handle a browser-initiated fragment change (typed URL, back/forward).
    /// Never writes the hash back, so no write-back loop can form.
    pub fn on_fragment_change(&mut self, fragment: &str) {
        self.navigate(decode(fragment), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_no_params_has_no_question_mark() {
        for page in [PageName::Home, PageName::Terms, PageName::AdminDashboard] {
            let fragment = encode(&RouteState::to(page));
            assert!(!fragment.contains('?'), "unexpected '?' in {}", fragment);
        }
    }

    #[test]
    fn test_decode_empty_equals_home() {
        assert_eq!(decode(""), decode("home"));
        assert_eq!(decode("").page, PageName::Home);
    }

    #[test]
    fn test_decode_unknown_page_falls_back_to_home() {
        assert_eq!(decode("no-such-page").page, PageName::Home);
        assert_eq!(decode("no-such-page?id=7").id, "7");
    }

    #[test]
    fn test_notice_round_trip() {
        let route = decode("notice?id=42");
        assert_eq!(route.page, PageName::Notice);
        assert_eq!(route.id, "42");
        assert_eq!(route.title, "");
        assert_eq!(route.query, "");
        assert_eq!(route.slug, "");
        assert_eq!(encode(&route), "notice?id=42");
    }

    #[test]
    fn test_round_trip_all_params() {
        let route = RouteState::to(PageName::Search)
            .with_id("a1")
            .with_title("Annual Sports")
            .with_query("sports day")
            .with_slug("sports");
        let decoded = decode(&encode(&route));
        assert_eq!(decoded, route);
    }

    #[test]
    fn test_params_percent_coded() {
        let route = RouteState::to(PageName::Search).with_query("exam & results");
        let fragment = encode(&route);
        assert!(!fragment.contains(" & "), "raw '&' would split the pair");
        assert_eq!(decode(&fragment).query, "exam & results");
    }

    #[test]
    fn test_decode_tolerates_leading_hash_and_order() {
        let route = decode("#page-viewer?slug=admissions&title=Admissions");
        assert_eq!(route.page, PageName::PageViewer);
        assert_eq!(route.slug, "admissions");
        assert_eq!(route.title, "Admissions");

        let reordered = decode("page-viewer?title=Admissions&slug=admissions");
        assert_eq!(route, reordered);
    }

    #[test]
    fn test_unknown_params_ignored() {
        let route = decode("news?id=9&utm_source=mail");
        assert_eq!(route.id, "9");
        assert_eq!(route.title, "");
    }
}
