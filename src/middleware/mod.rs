pub mod request_id;

pub use request_id::{request_id_middleware, request_span, RequestId, REQUEST_ID_HEADER};
