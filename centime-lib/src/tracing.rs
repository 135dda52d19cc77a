use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder, TracingLogger};

pub struct CentimeRootSpanBuilder;

impl RootSpanBuilder for CentimeRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        tracing_actix_web::root_span!(request, user_id = tracing::field::Empty)
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

/// Request logging middleware. The root span carries a `user_id` field which is filled in once the
/// bearer token is validated.
pub fn create_middleware() -> TracingLogger<CentimeRootSpanBuilder> {
    TracingLogger::<CentimeRootSpanBuilder>::new()
}
