//! HTTP routing for the GraphQL endpoint.

use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::types::OperationType;
use async_graphql::{Request, Response as GqlResponse, ServerError};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use projectdesk_graphql::AppSchema;

/// Path of the single GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct RouteState {
    schema: AppSchema,
    graphiql: bool,
}

/// Build the router for `/graphql`.
///
/// `POST` executes any operation. `GET` executes queries passed as
/// `?query=...`; a browser request without a query gets the GraphiQL IDE
/// instead when `graphiql` is set. Mutations are refused over `GET`.
pub fn router(schema: AppSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, post(graphql_post).get(graphql_get))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(RouteState { schema, graphiql })
}

async fn graphql_post(State(state): State<RouteState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphql_get(
    State(state): State<RouteState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let query = query.unwrap_or_default();
    if state.graphiql && accepts_html(&headers) && !has_query_param(&query) {
        return graphiql_page().into_response();
    }

    let request = match parse_query_string(&query) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected GET request");
            return error_response(StatusCode::BAD_REQUEST, "Must provide query string.");
        }
    };
    if is_mutation(&request) {
        let mut response = error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
        response
            .headers_mut()
            .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
        return response;
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

fn graphiql_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn has_query_param(query: &str) -> bool {
    query
        .split('&')
        .any(|pair| pair.split('=').next() == Some("query"))
}

/// Whether the operation the request would run is a mutation.
///
/// Unparseable documents are left for execution to report.
fn is_mutation(request: &Request) -> bool {
    let Ok(document) = async_graphql::parser::parse_query(&request.query) else {
        return false;
    };
    let wanted = request.operation_name.as_deref();

    document
        .operations
        .iter()
        .filter(|(name, _)| wanted.is_none() || name.map(|n| n.as_str()) == wanted)
        .any(|(_, op)| op.node.ty == OperationType::Mutation)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = GqlResponse::from_errors(vec![ServerError::new(message, None)]);
    (status, GraphQLResponse::from(body)).into_response()
}
