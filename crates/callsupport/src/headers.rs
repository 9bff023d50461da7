//! Request header construction.
//!
//! Headers are layered in a fixed order, each layer replacing same-named
//! headers from the layers before it:
//!
//! 1. the `x-api-client` identification header
//! 2. the caller's key/value pairs, in order
//! 3. `User-Agent`, then `Content-Type` when one is given
//! 4. the caller-supplied header map, replacing every value of each name it
//!    contains

use crate::config::ClientIdentity;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};

/// Name of the client identification header.
pub const X_API_CLIENT: &str = "x-api-client";

/// Build request headers using the default [`ClientIdentity`] with the given
/// user agent.
///
/// `keyvals` is a flat list of alternating header names and values.
///
/// # Errors
///
/// Returns [`Error::OddHeaderPairs`] if `keyvals` has odd length; no headers
/// are built in that case. Returns [`Error::InvalidHeaderName`] or
/// [`Error::InvalidHeaderValue`] if a name or value is not valid in HTTP.
pub fn request_headers<S>(
    user_agent: &str,
    content_type: &str,
    user_headers: &HeaderMap,
    keyvals: &[S],
) -> Result<HeaderMap>
where
    S: AsRef<str>,
{
    ClientIdentity::default()
        .with_user_agent(user_agent)
        .request_headers(content_type, user_headers, keyvals)
}

impl ClientIdentity {
    /// Build request headers identifying this client.
    ///
    /// See [`request_headers`] for the layering rules and `keyvals` format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OddHeaderPairs`] if `keyvals` has odd length, or an
    /// invalid header error if a name or value cannot be sent.
    pub fn request_headers<S>(
        &self,
        content_type: &str,
        user_headers: &HeaderMap,
        keyvals: &[S],
    ) -> Result<HeaderMap>
    where
        S: AsRef<str>,
    {
        if keyvals.len() % 2 != 0 {
            tracing::error!(
                len = keyvals.len(),
                "header key/value list has a key without a value"
            );
            return Err(Error::OddHeaderPairs { len: keyvals.len() });
        }

        let mut headers = HeaderMap::new();
        insert(&mut headers, X_API_CLIENT, &self.api_client_header())?;

        for pair in keyvals.chunks_exact(2) {
            insert(&mut headers, pair[0].as_ref(), pair[1].as_ref())?;
        }

        headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &self.user_agent)?);
        if !content_type.is_empty() {
            headers.insert(
                CONTENT_TYPE,
                header_value(CONTENT_TYPE.as_str(), content_type)?,
            );
        }

        for name in user_headers.keys() {
            headers.remove(name);
            for value in user_headers.get_all(name) {
                headers.append(name.clone(), value.clone());
            }
        }

        tracing::debug!(headers = headers.len(), "built request headers");
        Ok(headers)
    }
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::InvalidHeaderName(name.to_string()))?;
    headers.insert(header_name, header_value(name, value)?);
    Ok(())
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| Error::InvalidHeaderValue {
        name: name.to_string(),
    })
}
