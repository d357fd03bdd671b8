//! Fruit HTTP handlers.
//!
//! ```text
//! GET    /fruits
//! GET    /fruits/{id}
//! POST   /fruits
//! PUT    /fruits/{id}
//! DELETE /fruits/{id}
//! ```
//!
//! Each mutating request forms one linear chain: validate, look up where
//! needed, mutate through the transactional store, map the outcome. An
//! absent entity short-circuits the chain to a 404 before any mutation
//! step runs; failures propagate untouched to the error boundary.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{FruitsCommand as _, FruitsQuery as _};
use crate::domain::{Error, Fruit, FruitDraft, FruitId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{forbidden_field_error, require_name};

/// Request payload for creating or renaming a fruit.
///
/// `id` is only ever store-assigned; clients must leave it unset.
#[derive(Debug, Deserialize, Serialize)]
pub struct FruitPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Response payload for a persisted fruit.
#[derive(Debug, Serialize)]
pub struct FruitResponse {
    pub id: i64,
    pub name: String,
}

impl From<Fruit> for FruitResponse {
    fn from(value: Fruit) -> Self {
        Self {
            id: value.id.as_i64(),
            name: value.name.into(),
        }
    }
}

fn parse_create_payload(payload: FruitPayload) -> Result<FruitDraft, Error> {
    if payload.id.is_some() {
        return Err(forbidden_field_error("Id"));
    }
    let name = require_name(payload.name)?;
    Ok(FruitDraft { name })
}

/// List the whole catalogue, sorted by name ascending.
#[get("/fruits")]
pub async fn list_fruits(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<FruitResponse>>> {
    let fruits = state.fruits_query.list().await?;
    Ok(web::Json(fruits.into_iter().map(Into::into).collect()))
}

/// Fetch a single fruit by id.
#[get("/fruits/{id}")]
pub async fn get_fruit(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<FruitResponse>> {
    match state.fruits_query.find(FruitId::new(id.into_inner())).await? {
        Some(fruit) => Ok(web::Json(fruit.into())),
        None => Err(Error::NotFound),
    }
}

/// Create a fruit; the store assigns its identity.
#[post("/fruits")]
pub async fn create_fruit(
    state: web::Data<HttpState>,
    payload: web::Json<FruitPayload>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create_payload(payload.into_inner())?;
    let created = state.fruits.create(draft).await?;
    Ok(HttpResponse::Created().json(FruitResponse::from(created)))
}

/// Rename an existing fruit.
#[put("/fruits/{id}")]
pub async fn update_fruit(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<FruitPayload>,
) -> ApiResult<web::Json<FruitResponse>> {
    let name = require_name(payload.into_inner().name)?;

    match state
        .fruits
        .rename(FruitId::new(id.into_inner()), name)
        .await?
    {
        Some(fruit) => Ok(web::Json(fruit.into())),
        None => Err(Error::NotFound),
    }
}

/// Delete a fruit by id.
#[delete("/fruits/{id}")]
pub async fn delete_fruit(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    if state.fruits.delete(FruitId::new(id.into_inner())).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn create_payload_rejects_a_preset_id() {
        let payload = FruitPayload {
            id: Some(7),
            name: Some("Apple".to_owned()),
        };

        let err = parse_create_payload(payload).expect_err("id must be unset");
        assert_eq!(err, Error::validation("Id was invalidly set on request."));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    fn create_payload_requires_a_name(#[case] name: Option<String>) {
        let payload = FruitPayload { id: None, name };
        assert!(parse_create_payload(payload).is_err());
    }

    #[rstest]
    fn create_payload_accepts_a_plain_draft() {
        let payload = FruitPayload {
            id: None,
            name: Some("Apple".to_owned()),
        };

        let draft = parse_create_payload(payload).expect("valid draft");
        assert_eq!(draft.name.as_str(), "Apple");
    }
}
