use actix_web::{dev::ServiceRequest, http::header::HeaderName};
use std::str::FromStr;

/// `Ok(None)` when the header is absent; `Err` when present but unparsable.
pub fn get_header<T>(req: &ServiceRequest, header_name: &'static str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    let Some(header_value) = req.headers().get(HeaderName::from_static(header_name)) else {
        return Ok(None);
    };

    header_value
        .to_str()
        .map_err(|_| format!("header {header_name} can't be converted to string"))?
        .parse::<T>()
        .map(Some)
        .map_err(|_| format!("header {header_name} has wrong type"))
}
