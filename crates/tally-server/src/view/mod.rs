//! Template views (full page + fragment).
//!
//! Two loading modes, selected by config:
//! - preloaded: templates parsed once at startup, load failure is fatal;
//! - per-request reload: templates re-read from disk on every render, load
//!   failure surfaces as a `Template` error the handler boundary swallows.

use tally_core::error::{Result, TallyError};
use tally_core::CounterView;
use tera::Tera;

use crate::config::ServerSection;

/// Full page template name (root route).
pub const PAGE_TEMPLATE: &str = "index.html";
/// Fragment template name (mutation responses).
pub const FRAGMENT_TEMPLATE: &str = "counter.html";

pub enum ViewEngine {
    Preloaded(Tera),
    PerRequest { glob: String },
}

impl ViewEngine {
    pub fn new(cfg: &ServerSection) -> Result<Self> {
        let glob = dir_glob(&cfg.templates_dir);
        if cfg.reload_templates {
            // Load deferred to render time; a broken directory must not keep
            // the server from starting in this mode.
            return Ok(Self::PerRequest { glob });
        }
        Ok(Self::Preloaded(load(&glob)?))
    }

    /// Render `name` against the current counter value.
    pub fn render(&self, name: &str, value: i64) -> Result<String> {
        let ctx = tera::Context::from_serialize(CounterView::new(value))
            .map_err(|e| TallyError::Template(format!("context build failed: {e}")))?;
        let rendered = match self {
            Self::Preloaded(tera) => tera.render(name, &ctx),
            Self::PerRequest { glob } => load(glob)?.render(name, &ctx),
        };
        rendered.map_err(|e| TallyError::Template(format!("render {name} failed: {e}")))
    }
}

fn dir_glob(dir: &str) -> String {
    format!("{}/**/*.html", dir.trim_end_matches('/'))
}

fn load(glob: &str) -> Result<Tera> {
    let tera =
        Tera::new(glob).map_err(|e| TallyError::Template(format!("template load failed: {e}")))?;
    for required in [PAGE_TEMPLATE, FRAGMENT_TEMPLATE] {
        if !tera.get_template_names().any(|n| n == required) {
            return Err(TallyError::Template(format!(
                "required template missing: {required}"
            )));
        }
    }
    Ok(tera)
}
