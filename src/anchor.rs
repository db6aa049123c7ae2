//! Smooth scrolling for same-document anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Vertical alignment of a scrolled-to element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
}

/// A scroll the host should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target_id: String,
    pub block: ScrollBlock,
}

/// Element id named by a fragment `href` such as `#projects`.
///
/// Bare `#` and links that are not pure fragments name nothing.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.trim().strip_prefix('#').filter(|id| !id.is_empty())
}

/// Resolve a link activation into a scroll, if the fragment names an element.
///
/// The default jump is always cancelled by the host; a `None` here means
/// nothing moves.
pub fn resolve<F>(href: &str, exists: F) -> Option<ScrollRequest>
where
    F: Fn(&str) -> bool,
{
    let id = fragment_id(href)?;
    exists(id).then(|| ScrollRequest { target_id: id.to_owned(), block: ScrollBlock::Start })
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use super::resolve;
    use crate::dom;
    use crate::error::PageError;

    /// Intercept every link matching `selector`. Returns how many were wired.
    pub fn mount(document: &Document, selector: &str) -> Result<usize, PageError> {
        let anchors = dom::query_all(document, selector)?;
        for anchor in &anchors {
            let link = anchor.clone();
            let document = document.clone();
            dom::on_click(anchor, move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(request) = resolve(&href, |id| document.get_element_by_id(id).is_some()) else {
                    log::debug!("anchor {href} has no target");
                    return;
                };
                if let Some(target) = document.get_element_by_id(&request.target_id) {
                    dom::scroll_to(&target, request.block);
                }
            })?;
        }
        Ok(anchors.len())
    }
}
