use utoipa::OpenApi;

pub mod v1;

#[derive(OpenApi)]
#[openapi(
    paths(
        v1::book,
        v1::subscribe,
    ),
    components(schemas(v1::BookingRequest, v1::SubscribeRequest, v1::QuoteResponse)),
    tags(
            (name = "bookings", description = "Travel booking endpoints."),
            (name = "subscribers", description = "Subscriber management endpoints.")
        ),
    )]
pub(super) struct ApiDoc;
