//! Request plumbing shared by every resource client.

pub mod params;
mod request;
pub mod url_encoding;

pub use params::QueryParams;
pub use request::{ApiRequest, RequestEnvelope, Requester, ResponseBody, Surface};
pub use url_encoding::encode_path_segment;

pub(crate) use request::{decode_value, take_pointer};
