//! Protocol responder
//!
//! Turns one inbound datagram into at most one outbound datagram. The
//! responder only ever reads the cache; it never blocks and never keeps
//! per-client state. Anything it cannot serve - undecodable packet,
//! method other than GET, unmapped resource - is dropped without a
//! reply.

use alloc::vec::Vec;

use atrium_core::cache::SensorCache;
use coap_lite::{CoapOption, ContentFormat, MessageClass, MessageType, Packet, RequestType, ResponseType};
use heapless::String;

use crate::resource;
use crate::senml::Envelope;

/// Largest datagram the responder will consider
pub const MAX_DATAGRAM_LEN: usize = 512;

/// Maximum joined Uri-Path length
const MAX_PATH_LEN: usize = 64;

/// Service one inbound datagram against the cache
///
/// Returns the encoded response datagram, correlated to the request by
/// message id and token, or `None` when the request is dropped.
pub fn respond(base_name: &str, cache: &SensorCache, datagram: &[u8]) -> Option<Vec<u8>> {
    let request = Packet::from_bytes(datagram).ok()?;

    if request.header.code != MessageClass::Request(RequestType::Get) {
        return None;
    }

    let path = request_path(&request)?;
    let binding = resource::lookup(path.as_str())?;

    let mut envelope = Envelope::new(base_name, cache.last_update_ms());
    binding.read(cache, &mut envelope).ok()?;
    let body = envelope.to_json().ok()?;

    let mut response = Packet::new();
    response.header.set_version(1);
    response.header.message_id = request.header.message_id;
    response.header.code = MessageClass::Response(ResponseType::Content);
    response.header.set_type(match request.header.get_type() {
        MessageType::Confirmable => MessageType::Acknowledgement,
        _ => MessageType::NonConfirmable,
    });
    response.set_token(request.get_token().to_vec());
    response.set_content_format(ContentFormat::ApplicationSenmlJSON);
    response.payload = body.to_vec();

    response.to_bytes().ok()
}

/// Join the request's Uri-Path segments with `/`
fn request_path(request: &Packet) -> Option<String<MAX_PATH_LEN>> {
    let segments = request.get_option(CoapOption::UriPath)?;

    let mut path: String<MAX_PATH_LEN> = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let segment = core::str::from_utf8(segment).ok()?;
        if i > 0 {
            path.push('/').ok()?;
        }
        path.push_str(segment).ok()?;
    }
    Some(path)
}
