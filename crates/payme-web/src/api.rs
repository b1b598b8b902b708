//! API Client
//!
//! Same-origin calls to the two backend endpoints the pay page uses. A non-2xx
//! response always becomes [`PayError::Http`] with the numeric status; the
//! body of a failed response is never decoded.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Response;
use serde::de::DeserializeOwned;

use payme_core::{CheckoutSession, InvoiceResponse, PayError, Result};

/// Characters escaped when an invoice id is spliced into a URL path segment.
/// Matches what `encodeURIComponent` leaves alone.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn encode_segment(id: &str) -> Cow<'_, str> {
    utf8_percent_encode(id, SEGMENT).into()
}

fn invoice_url(id: &str) -> String {
    format!("/api/invoices/{}", encode_segment(id))
}

fn checkout_url(id: &str) -> String {
    format!("/pay/{}/checkout", encode_segment(id))
}

async fn decode_ok<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(PayError::Http {
            status: response.status().as_u16(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| PayError::Decode(e.to_string()))
}

/// Fetch the current state of an invoice
pub async fn fetch_invoice(id: &str) -> Result<InvoiceResponse> {
    let response = reqwest::Client::new()
        .get(invoice_url(id))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| PayError::Network(e.to_string()))?;

    decode_ok(response).await
}

/// Start a checkout session for an invoice
pub async fn start_checkout(id: &str) -> Result<CheckoutSession> {
    let response = reqwest::Client::new()
        .post(checkout_url(id))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| PayError::Network(e.to_string()))?;

    decode_ok(response).await
}
