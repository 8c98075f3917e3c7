//! Target → JSON shape table.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Assistant or editor whose MCP configuration is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantTarget {
    Cursor,
    Claude,
    Windsurf,
    Vscode,
    Cline,
    Highlight,
    Augment,
    Mysty,
}

impl AssistantTarget {
    pub const ALL: [AssistantTarget; 8] = [
        AssistantTarget::Cursor,
        AssistantTarget::Claude,
        AssistantTarget::Windsurf,
        AssistantTarget::Vscode,
        AssistantTarget::Cline,
        AssistantTarget::Highlight,
        AssistantTarget::Augment,
        AssistantTarget::Mysty,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AssistantTarget::Cursor => "cursor",
            AssistantTarget::Claude => "claude",
            AssistantTarget::Windsurf => "windsurf",
            AssistantTarget::Vscode => "vscode",
            AssistantTarget::Cline => "cline",
            AssistantTarget::Highlight => "highlight",
            AssistantTarget::Augment => "augment",
            AssistantTarget::Mysty => "mysty",
        }
    }

    pub fn shape(self) -> TemplateShape {
        TARGET_SHAPES
            .iter()
            .find(|(target, _)| *target == self)
            .map(|(_, shape)| *shape)
            .unwrap_or(TemplateShape::ManualInstructions)
    }
}

/// Layout of one MCP client configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateShape {
    /// `{"url": ...}` under `mcpServers`.
    Url,
    /// `npx mcp-remote <url>` under `mcpServers`.
    McpRemote,
    /// `{"serverUrl": ...}` under `mcpServers`.
    ServerUrl,
    /// `{"type":"http","url": ...}` under `servers`.
    HttpServer,
    /// `url` plus Cline's `disabled`/`autoApprove` flags.
    ClineUrl,
    /// No document; the client is configured by hand.
    ManualInstructions,
}

/// Single source of truth for which shape each target receives.
pub const TARGET_SHAPES: &[(AssistantTarget, TemplateShape)] = &[
    (AssistantTarget::Cursor, TemplateShape::Url),
    (AssistantTarget::Claude, TemplateShape::McpRemote),
    (AssistantTarget::Windsurf, TemplateShape::ServerUrl),
    (AssistantTarget::Vscode, TemplateShape::HttpServer),
    (AssistantTarget::Cline, TemplateShape::ClineUrl),
    (AssistantTarget::Highlight, TemplateShape::ManualInstructions),
    (AssistantTarget::Augment, TemplateShape::McpRemote),
    (AssistantTarget::Mysty, TemplateShape::McpRemote),
];

impl TemplateShape {
    /// Key holding the server map, `None` for manual setup.
    pub const fn root_key(&self) -> Option<&'static str> {
        match self {
            TemplateShape::HttpServer => Some("servers"),
            TemplateShape::ManualInstructions => None,
            _ => Some("mcpServers"),
        }
    }

    fn server_entry(&self, url: &str) -> Option<Value> {
        let entry = match self {
            TemplateShape::Url => json!({ "url": url }),
            TemplateShape::McpRemote => json!({ "command": "npx", "args": ["mcp-remote", url] }),
            TemplateShape::ServerUrl => json!({ "serverUrl": url }),
            TemplateShape::HttpServer => json!({ "type": "http", "url": url }),
            TemplateShape::ClineUrl => json!({ "url": url, "disabled": false, "autoApprove": [] }),
            TemplateShape::ManualInstructions => return None,
        };
        Some(entry)
    }

    /// Build the document for server `id` reachable at `url`.
    pub fn document(&self, id: &str, url: &str) -> Option<Value> {
        let root_key = self.root_key()?;
        let entry = self.server_entry(url)?;

        let mut servers = Map::new();
        servers.insert(id.to_string(), entry);
        let mut root = Map::new();
        root.insert(root_key.to_string(), Value::Object(servers));
        Some(Value::Object(root))
    }
}
