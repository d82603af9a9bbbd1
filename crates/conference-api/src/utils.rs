use std::{
    convert::Infallible,
    future::{Ready, ready},
    ops::Deref,
};

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, http::header::ContentType,
};
use mkenv::prelude::*;
use serde::Serialize;

use crate::ApiResult;

/// Converts the provided body to a `200 OK` JSON response.
///
/// The body is indented unless disabled by the environment.
pub fn json<T: Serialize>(obj: T) -> ApiResult<HttpResponse> {
    if crate::env().pretty_json.get() {
        let body = serde_json::to_string_pretty(&obj)?;
        Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body))
    } else {
        Ok(HttpResponse::Ok().json(obj))
    }
}

/// A resource handler, like [`Data`][d].
///
/// The difference with [`Data`][d] is that it doesn't use an [`Arc`](std::sync::Arc)
/// internally, but the [`Clone`] implementation of the inner type to implement [`FromRequest`].
///
/// [d]: actix_web::web::Data
#[derive(Clone)]
pub struct Res<T>(pub T);

impl<T> Deref for Res<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Clone + 'static> FromRequest for Res<T> {
    type Error = Infallible;

    type Future = Ready<Result<Self, Infallible>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let res = req
            .app_data::<T>()
            .unwrap_or_else(|| panic!("{} should be present", std::any::type_name::<T>()))
            .clone();
        ready(Ok(Self(res)))
    }
}
