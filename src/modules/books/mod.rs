pub mod booklist;
pub mod catalog;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod preview;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};

use crate::session::SharedSession;

/// Catalog browsing: search, pagination and book details
pub struct BooksModule {
    session: SharedSession,
}

impl BooksModule {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let session = self.session.lock().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = session.catalog().len(),
            page_size = session.booklist.page_size(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.session.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Books listed so far",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Current list state",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ListView" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/search": {
                    "post": {
                        "summary": "Filter the catalog and list the first page",
                        "tags": ["Books"],
                        "requestBody": {
                            "content": {
                                "application/x-www-form-urlencoded": {
                                    "schema": { "$ref": "#/components/schemas/SearchForm" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "First page of matches",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SearchResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/show-more": {
                    "post": {
                        "summary": "Reveal the next page of matches",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Books to append; empty when nothing remains",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/PageResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/authors": {
                    "get": {
                        "summary": "Author filter options",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Options, starting with `any`",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/DropdownOption" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/genres": {
                    "get": {
                        "summary": "Genre filter options",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Options, starting with `any`",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/DropdownOption" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "A book's details",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Book detail",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookDetail" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Unknown book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}/open": {
                    "post": {
                        "summary": "Open a book's detail overlay",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Book detail",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookDetail" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Unknown book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Books health check",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": { "schema": { "type": "string" } }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "PreviewCard": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "image": { "type": "string", "format": "uri" },
                            "title": { "type": "string" },
                            "author": { "type": "string", "description": "Author display name" }
                        },
                        "required": ["id", "image", "title", "author"]
                    },
                    "ShowMoreButton": {
                        "type": "object",
                        "properties": {
                            "label": { "type": "string" },
                            "remaining": { "type": "integer", "minimum": 0 },
                            "disabled": { "type": "boolean" }
                        },
                        "required": ["label", "remaining", "disabled"]
                    },
                    "SearchForm": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string", "default": "any" },
                            "genre": { "type": "string", "default": "any" }
                        }
                    },
                    "ListView": {
                        "type": "object",
                        "properties": {
                            "items": { "type": "array", "items": { "$ref": "#/components/schemas/PreviewCard" } },
                            "total": { "type": "integer" },
                            "page_index": { "type": "integer" },
                            "empty": { "type": "boolean" },
                            "show_more": { "$ref": "#/components/schemas/ShowMoreButton" },
                            "criteria": { "$ref": "#/components/schemas/SearchForm" }
                        },
                        "required": ["items", "total", "page_index", "empty", "show_more", "criteria"]
                    },
                    "SearchResponse": {
                        "type": "object",
                        "properties": {
                            "items": { "type": "array", "items": { "$ref": "#/components/schemas/PreviewCard" } },
                            "total": { "type": "integer" },
                            "empty": { "type": "boolean" },
                            "show_more": { "$ref": "#/components/schemas/ShowMoreButton" },
                            "effects": { "type": "array", "items": { "type": "string", "enum": ["scroll_to_top"] } }
                        },
                        "required": ["items", "total", "empty", "show_more", "effects"]
                    },
                    "PageResponse": {
                        "type": "object",
                        "properties": {
                            "items": { "type": "array", "items": { "$ref": "#/components/schemas/PreviewCard" } },
                            "page_index": { "type": "integer" },
                            "show_more": { "$ref": "#/components/schemas/ShowMoreButton" }
                        },
                        "required": ["items", "page_index", "show_more"]
                    },
                    "DropdownOption": {
                        "type": "object",
                        "properties": {
                            "value": { "type": "string" },
                            "label": { "type": "string" }
                        },
                        "required": ["value", "label"]
                    },
                    "BookDetail": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "image": { "type": "string", "format": "uri" },
                            "blur_image": { "type": "string", "format": "uri" },
                            "title": { "type": "string" },
                            "subtitle": { "type": "string", "description": "Author and publication year" },
                            "description": { "type": "string" }
                        },
                        "required": ["id", "image", "blur_image", "title", "subtitle", "description"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(session: SharedSession) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(session))
}
