use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::api::graphql::schema::GatewaySchema;

pub async fn graphql_handler(
    Extension(schema): Extension<GatewaySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner();
    schema.execute(request).await.into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
