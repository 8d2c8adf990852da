use std::{cell::RefCell, rc::Rc};

use actix_web::{
    post,
    web::{Data, Json, ServiceConfig},
    HttpResponse, Responder,
};
use booking::{
    registry::BookingRegistry,
    subscriber::{FamilyMember, LogSink},
    Quote,
};
use common::subject_observer::Subject;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use transports::TransportKind;
use utoipa::ToSchema;
use validator::Validate;

pub fn configure() -> impl FnOnce(&mut ServiceConfig) {
    |config: &mut ServiceConfig| {
        config.service(book).service(subscribe);
    }
}

#[derive(Deserialize, Validate, ToSchema, Clone, Debug)]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "Please enter a destination."))]
    destination: String,
    /// Books every available option when absent.
    #[schema(value_type = Option<String>)]
    transport: Option<TransportKind>,
}

#[derive(Deserialize, Validate, ToSchema, Clone, Debug)]
pub struct SubscribeRequest {
    #[validate(length(min = 1, message = "Please enter a family member's name."))]
    name: String,
}

#[derive(Serialize, ToSchema, Clone, Debug)]
pub struct QuoteResponse {
    transport: String,
    duration: String,
    price: String,
    quality: String,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        QuoteResponse {
            transport: quote.mode,
            duration: quote.duration,
            price: quote.price,
            quality: quote.quality.to_string(),
        }
    }
}

#[utoipa::path(
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Quotes for the requested destination", body = [QuoteResponse]),
        (status = 400, description = "Missing destination")
    ),
    tag = "bookings"
)]
#[post("/bookings")]
pub async fn book(
    registry: Data<RefCell<BookingRegistry>>,
    request: Json<BookingRequest>,
) -> impl Responder {
    let request = request.into_inner();
    debug!("Booking request: {:?}", request);

    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().body(errors.to_string());
    }

    let kinds = match request.transport {
        Some(kind) => vec![kind],
        None => TransportKind::iter().collect(),
    };

    let registry = registry.borrow();
    let quotes = kinds
        .into_iter()
        .map(|kind| QuoteResponse::from(registry.book(kind.option(), &request.destination)))
        .collect::<Vec<_>>();

    HttpResponse::Ok().json(quotes)
}

#[utoipa::path(
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscriber registered"),
        (status = 400, description = "Missing name")
    ),
    tag = "subscribers"
)]
#[post("/subscribers")]
pub async fn subscribe(
    registry: Data<RefCell<BookingRegistry>>,
    request: Json<SubscribeRequest>,
) -> impl Responder {
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().body(errors.to_string());
    }

    registry
        .borrow_mut()
        .register_observer(Rc::new(FamilyMember::new(
            request.name.clone(),
            Rc::new(LogSink),
        )));
    debug!("Subscribed {} for booking updates", request.name);

    HttpResponse::Created().body(format!("{} is now subscribed for updates", request.name))
}
