//! Shared route tables and helpers for integration tests.

#![allow(dead_code)]

use lambdamux::{HandlerResult, LambdaMux, ProxyRequest, ProxyResponse, RadixTree};
use serde_json::json;

/// Word list with heavy prefix sharing.
pub const WORDS: &[&str] = &[
    "alligator",
    "alien",
    "baloon",
    "chromodynamic",
    "romane",
    "romanus",
    "romulus",
    "rubens",
    "ruber",
    "rubicon",
    "rubicundus",
    "all",
    "rub",
    "ba",
];

/// Mixed literal and capture keys, including a duplicate.
pub const WIDGET_ROUTES: &[&str] = &[
    "GET /",
    "GET /contact",
    "GET /api/widgets",
    "POST /api/widgets",
    "POST /api/widgets/:id",
    "POST /api/widgets/:id/parts",
    "POST /api/widgets/:id/parts/:partId/update",
    "POST /api/widgets/:id/parts/:partId/delete",
    "POST /:id",
    "POST /:id/admin",
    "POST /:id/image",
    "DELETE /users/:id",
    "DELETE /users/:id",
    "DELETE /users/:id/admin",
    "DELETE /images/:id",
    "GET /products/:category/:id",
    "PUT /customers/:customerId/orders/:orderId",
    "PATCH /articles/:articleId/comments/:commentId",
    "GET /search/:query/page/:pageNumber",
    "POST /upload/:fileType/:userId",
];

/// The pet store API as (method, path).
pub const PET_STORE: &[(&str, &str)] = &[
    ("POST", "/pet"),
    ("PUT", "/pet"),
    ("GET", "/pet/findByStatus"),
    ("GET", "/pet/findByTags"),
    ("GET", "/pet/:petId"),
    ("POST", "/pet/:petId"),
    ("DELETE", "/pet/:petId"),
    ("POST", "/pet/:petId/uploadImage"),
    ("GET", "/store/inventory"),
    ("POST", "/store/order"),
    ("GET", "/store/order/:orderId"),
    ("DELETE", "/store/order/:orderId"),
    ("POST", "/user"),
    ("POST", "/user/createWithList"),
    ("GET", "/user/login"),
    ("GET", "/user/logout"),
    ("GET", "/user/:username"),
    ("PUT", "/user/:username"),
    ("DELETE", "/user/:username"),
];

/// Tree whose values are the inserted keys.
pub fn tree_of(keys: &[&str]) -> RadixTree<String> {
    let mut tree = RadixTree::new();
    for key in keys {
        tree.insert(key, key.to_string()).unwrap();
    }
    tree
}

/// Handler answering `{"message": "Handled <METHOD> request for <path>"}`,
/// plus the bound captures under `params` when there are any.
pub fn describe(method: &str, path: &str) -> impl lambdamux::Handler {
    let message = format!("Handled {method} request for {path}");
    move |request: ProxyRequest| {
        let message = message.clone();
        async move {
            let mut body = json!({ "message": message });
            if !request.path_parameters.is_empty() {
                body["params"] = json!(request.path_parameters);
            }
            HandlerResult::Ok(ProxyResponse::json(200, &body)?)
        }
    }
}

pub fn pet_store() -> LambdaMux {
    let mut mux = LambdaMux::new();
    for (method, path) in PET_STORE {
        mux.register(method, path, describe(method, path)).unwrap();
    }
    mux
}
