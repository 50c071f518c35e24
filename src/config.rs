use serde::Deserialize;

/// Id of the `<script type="application/json">` block in index.html.
pub const CONFIG_SCRIPT_ID: &str = "board-config";

pub const DEFAULT_STATUS_HIDE_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every API URL. Empty means same origin.
    pub api_base: String,
    /// How long a signup status message stays visible.
    pub status_hide_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_hide_ms: DEFAULT_STATUS_HIDE_MS,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// Reads the embedded config block. Falls back to defaults when the block
    /// is missing or malformed; the error string is for the console.
    pub fn load() -> (Self, Option<String>) {
        let Some(raw) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            return (Self::default(), None);
        };
        match Self::from_json(&raw) {
            Ok(cfg) => (cfg, None),
            Err(e) => (
                Self::default(),
                Some(format!("Ignoring #{CONFIG_SCRIPT_ID}: {e}")),
            ),
        }
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    doc.get_element_by_id(script_id)?.text_content()
}
