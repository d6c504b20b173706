//! HTTP front end for the users and todos stores.
//!
//! # Overview
//! Mounts both stores under `/api/users` and `/api/todos`, plus a welcome
//! message on `/`. Each store sits behind its own `RwLock`: list and get share
//! it, create/update/delete take it exclusively.
//!
//! # Design
//! - `app` builds the service from an `AppState`, so tests drive exactly the
//!   service the binary serves. Paths are matched with any trailing slash
//!   removed.
//! - Store failures become 404/400 bodies through `ApiError`. Undecodable
//!   bodies and handler panics become a generic 500 whose detail is only
//!   shown in development.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod telemetry;

use std::{any::Any, sync::Arc};

use axum::{extract::Request, middleware, routing::get, Router, ServiceExt};
use crud_core::{TodoStore, UserStore};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    catch_panic::CatchPanicLayer, normalize_path::NormalizePath, trace::TraceLayer,
};

use crate::config::Environment;

/// Shared router state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<RwLock<UserStore>>,
    pub todos: Arc<RwLock<TodoStore>>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(users: UserStore, todos: TodoStore, environment: Environment) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            todos: Arc::new(RwLock::new(todos)),
            environment,
        }
    }

    /// State holding the two seeded users and two seeded todos.
    pub fn seeded(environment: Environment) -> Self {
        Self::new(UserStore::seeded(), TodoStore::seeded(), environment)
    }
}

/// The served application: the layered router behind trailing-slash
/// normalization, so `/api/users/` and `/api/users` reach the same route.
pub type App = NormalizePath<Router>;

/// Every route of the service, before state and middleware are attached.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::welcome))
        .nest("/api/users", routes::users::router())
        .nest("/api/todos", routes::todos::router())
        .fallback(routes::unknown_route)
}

/// Attach state, error mapping, panic catching and tracing to `routes`.
pub fn serve_routes(routes: Router<AppState>, state: AppState) -> App {
    let environment = state.environment.clone();
    let router = routes
        .layer(middleware::map_response_with_state(
            environment.clone(),
            error::expose_error_detail,
        ))
        .with_state(state)
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            error::panic_response(&environment, panic)
        }))
        .layer(TraceLayer::new_for_http());
    NormalizePath::trim_trailing_slash(router)
}

pub fn app(state: AppState) -> App {
    serve_routes(router(), state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    let service = ServiceExt::<Request>::into_make_service(app(state));
    axum::serve(listener, service).await
}
