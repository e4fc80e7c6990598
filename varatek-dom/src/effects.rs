//! Small page behaviors: the mobile menu, in-page anchors, reveal on scroll and the footer year.

use crate::{backend::PageBackend, config::SiteConfig};

/// Open or close the mobile navigation.
///
/// Returns whether it is open afterwards; a page without navigation is never open.
pub fn toggle_menu<B: PageBackend>(backend: &B, config: &SiteConfig) -> bool {
    match backend.first_with_class(&config.nav_links_class) {
        Some(nav) => backend.toggle_class(&nav, &config.menu_open_class, None),
        None => false,
    }
}

/// Close the mobile navigation.
pub fn close_menu<B: PageBackend>(backend: &B, config: &SiteConfig) {
    if let Some(nav) = backend.first_with_class(&config.nav_links_class) {
        backend.toggle_class(&nav, &config.menu_open_class, Some(false));
    }
}

/// The element id an in-page link points to.
///
/// A bare `#` points to nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// The `<a>` elements whose `href` starts with `#` , in document order.
pub fn anchor_links<B: PageBackend>(backend: &B) -> Vec<B::Element> {
    backend
        .elements_with_attr("href")
        .into_iter()
        .filter(|x| backend.tag_name(x) == "a")
        .filter(|x| {
            backend
                .attr(x, "href")
                .map(|h| h.starts_with('#'))
                .unwrap_or(false)
        })
        .collect()
}

/// Handle a click on an in-page link.
///
/// The target is scrolled into view (if it exists) and the mobile menu is closed.
/// Returns whether the default navigation should be prevented.
pub fn follow_anchor<B: PageBackend>(backend: &B, config: &SiteConfig, link: &B::Element) -> bool {
    let Some(href) = backend.attr(link, "href") else {
        return false;
    };
    let Some(id) = anchor_target(&href) else {
        return false;
    };
    if let Some(target) = backend.element_by_id(id) {
        backend.scroll_into_view(&target);
    }
    close_menu(backend, config);
    true
}

/// Handle an intersection change of a reveal element.
///
/// Returns whether the element no longer needs to be observed.
pub fn reveal<B: PageBackend>(
    backend: &B,
    config: &SiteConfig,
    elem: &B::Element,
    is_intersecting: bool,
) -> bool {
    if !is_intersecting {
        return false;
    }
    backend.toggle_class(elem, &config.visible_class, Some(true));
    true
}

/// Write the current year into the footer.
pub fn stamp_year<B: PageBackend>(backend: &B, config: &SiteConfig) {
    if let Some(elem) = backend.element_by_id(&config.year_id) {
        backend.set_text(&elem, &backend.current_year().to_string());
    }
}
