use serde::Deserialize;

use crate::templates::AssistantTarget;

/// Render defaults applied when the CLI does not override them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSection {
    pub default_target: Option<AssistantTarget>,
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRenderSection {
    pub default_target: Option<AssistantTarget>,
    pub pretty: Option<bool>,
}

pub fn parse_render_section(raw: Option<RawRenderSection>) -> RenderSection {
    let raw = raw.unwrap_or_default();
    RenderSection {
        default_target: raw.default_target,
        pretty: raw.pretty.unwrap_or(false),
    }
}
