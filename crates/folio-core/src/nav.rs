//! Active-section highlighting for the navigation bar.

use crate::config::Selectors;
use crate::error::AttachError;
use crate::intersection::IntersectionEntry;
use crate::surface::Surface;

struct NavLink<N> {
    node: N,
    href: Option<String>,
}

pub struct NavHighlighter<N> {
    sections: Vec<N>,
    links: Vec<NavLink<N>>,
    active_class: &'static str,
    active: Option<usize>,
}

impl<N: Clone + PartialEq> NavHighlighter<N> {
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
    ) -> Result<Self, AttachError> {
        let sections = surface.query_all(None, selectors.sections);
        if sections.is_empty() {
            return Err(AttachError::NoTargets(selectors.sections));
        }
        let links: Vec<NavLink<N>> = surface
            .query_all(None, selectors.nav_links)
            .into_iter()
            .map(|node| NavLink {
                href: surface.attribute(&node, selectors.nav_href_attr),
                node,
            })
            .collect();
        if links.is_empty() {
            return Err(AttachError::NoTargets(selectors.nav_links));
        }
        log::debug!("[nav] {} sections, {} links", sections.len(), links.len());
        Ok(Self {
            sections,
            links,
            active_class: selectors.nav_active_class,
            active: None,
        })
    }

    /// Sections to hand to the intersection watcher.
    pub fn sections(&self) -> &[N] {
        &self.sections
    }

    pub fn active_link(&self) -> Option<&N> {
        self.active.map(|i| &self.links[i].node)
    }

    /// Applies a batch in order; the last intersecting section with a link wins.
    pub fn on_entries<S: Surface<Node = N>>(
        &mut self,
        surface: &S,
        entries: &[IntersectionEntry<N>],
    ) {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(id) = surface.attribute(&entry.target, "id") else {
                continue;
            };
            let fragment = format!("#{id}");
            let Some(index) = self
                .links
                .iter()
                .position(|l| l.href.as_deref() == Some(fragment.as_str()))
            else {
                continue;
            };
            for link in &self.links {
                surface.remove_class(&link.node, self.active_class);
            }
            surface.add_class(&self.links[index].node, self.active_class);
            self.active = Some(index);
        }
    }

    pub fn detach<S: Surface<Node = N>>(self, surface: &S) {
        for link in &self.links {
            surface.remove_class(&link.node, self.active_class);
        }
    }
}
