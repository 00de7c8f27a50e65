use serde::Serialize;

use super::controller::DuplicateController;
use crate::auth::Actor;
use crate::record::RawPost;

/// Identifier shared by every duplicate link, whatever the surface.
pub const LINK_ID: &str = "duplicate-record";

/// Admin UI places that offer the duplicate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    /// Link under the title in record lists.
    RowAction,
    /// Entry in the top toolbar, on the edit screen and on the public page.
    Toolbar,
    /// Side panel on the edit screen.
    Metabox,
}

impl Surface {
    pub const ALL: [Self; 3] = [Self::RowAction, Self::Toolbar, Self::Metabox];
}

/// Everything a surface needs to render its duplicate link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateLink {
    pub id: String,
    pub surface: Surface,
    pub label: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
}

/// Link for one surface, or `None` when `actor` may not duplicate `post`.
#[must_use]
pub fn duplicate_link(
    controller: &DuplicateController,
    post: &RawPost,
    actor: &Actor,
    surface: Surface,
) -> Option<DuplicateLink> {
    if !controller.policy().is_duplicable(post, actor) {
        return None;
    }
    let (label, description) = match surface {
        Surface::RowAction | Surface::Toolbar => ("Duplicate", None),
        Surface::Metabox => (
            "Duplicate record",
            Some("Use the button below to create a similar record."),
        ),
    };
    Some(DuplicateLink {
        id: LINK_ID.to_string(),
        surface,
        label: label.to_string(),
        title: "Create a copy of this record".to_string(),
        description: description.map(String::from),
        url: controller.duplicate_url(post, actor),
    })
}

/// Links for every surface; empty when the post is not duplicable.
#[must_use]
pub fn duplicate_links(
    controller: &DuplicateController,
    post: &RawPost,
    actor: &Actor,
) -> Vec<DuplicateLink> {
    Surface::ALL
        .into_iter()
        .filter_map(|surface| duplicate_link(controller, post, actor, surface))
        .collect()
}
