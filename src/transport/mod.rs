//! Transport layer: NetGSM wire formats (JSON and XML encode/decode).

mod send_bulk;
mod send_otp;

pub use send_bulk::{decode_bulk_send_json_response, encode_bulk_send_json};
pub use send_otp::{decode_otp_send_xml_response, encode_otp_send_xml};
