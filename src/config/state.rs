// Application state module
// Read-only process state shared by every connection

use crate::config::Config;
use crate::handler::routes::RouteTable;
use crate::templates::Renderer;

/// Application state
///
/// Built once at startup and shared behind an `Arc`; nothing in here is
/// mutated after construction. The route table is fixed and the renderer
/// holds its templates pre-registered.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub renderer: Renderer,
}

impl AppState {
    /// Build the application state, registering templates and routes.
    ///
    /// Fails when the views or partials directory cannot be read or a
    /// template does not parse.
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let renderer = Renderer::new(&config.paths.views, &config.paths.partials)?;

        Ok(Self {
            config: config.clone(),
            routes: RouteTable::new(),
            renderer,
        })
    }
}
