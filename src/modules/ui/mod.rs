pub mod overlay;
pub mod routes;
pub mod theme;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};

use crate::session::SharedSession;

/// Page chrome: the theme and which overlays are open
pub struct UiModule {
    session: SharedSession,
}

impl UiModule {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Module for UiModule {
    fn name(&self) -> &'static str {
        "ui"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let theme = self.session.lock().await.theme(None);
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            theme = theme.as_str(),
            "ui module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.session.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let overlay_name = serde_json::json!({
            "name": "name",
            "in": "path",
            "required": true,
            "schema": { "type": "string", "enum": ["search", "settings", "detail"] }
        });
        let overlay_responses = serde_json::json!({
            "200": {
                "description": "Overlay state",
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/OverlaysView" }
                    }
                }
            },
            "400": {
                "description": "Unknown overlay",
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            }
        });
        let theme_response = serde_json::json!({
            "200": {
                "description": "Theme in effect",
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ThemeView" }
                    }
                }
            }
        });

        Some(serde_json::json!({
            "paths": {
                "/theme": {
                    "get": {
                        "summary": "Current theme and CSS variables",
                        "tags": ["UI"],
                        "responses": theme_response
                    },
                    "post": {
                        "summary": "Submit the settings form",
                        "tags": ["UI"],
                        "requestBody": {
                            "content": {
                                "application/x-www-form-urlencoded": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "theme": { "type": "string", "enum": ["day", "night"] }
                                        }
                                    }
                                }
                            }
                        },
                        "responses": theme_response
                    }
                },
                "/overlays": {
                    "get": {
                        "summary": "Open overlays",
                        "tags": ["UI"],
                        "responses": overlay_responses
                    }
                },
                "/overlays/{name}/open": {
                    "post": {
                        "summary": "Open an overlay",
                        "tags": ["UI"],
                        "parameters": [overlay_name],
                        "responses": overlay_responses
                    }
                },
                "/overlays/{name}/close": {
                    "post": {
                        "summary": "Close an overlay",
                        "tags": ["UI"],
                        "parameters": [overlay_name],
                        "responses": overlay_responses
                    }
                }
            },
            "components": {
                "schemas": {
                    "ThemeView": {
                        "type": "object",
                        "properties": {
                            "theme": { "type": "string", "enum": ["day", "night"] },
                            "palette": {
                                "type": "object",
                                "properties": {
                                    "--color-dark": { "type": "string" },
                                    "--color-light": { "type": "string" }
                                }
                            },
                            "css": { "type": "string" }
                        },
                        "required": ["theme", "palette", "css"]
                    },
                    "OverlaysView": {
                        "type": "object",
                        "properties": {
                            "open": {
                                "type": "array",
                                "items": { "type": "string", "enum": ["search", "settings", "detail"] }
                            },
                            "focus": { "type": "string", "nullable": true },
                            "active_book": { "type": "string", "nullable": true }
                        },
                        "required": ["open"]
                    }
                }
            }
        }))
    }
}

/// Create a new instance of the ui module
pub fn create_module(session: SharedSession) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(UiModule::new(session))
}
