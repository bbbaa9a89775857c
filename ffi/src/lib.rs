//! C-ABI wrapper around `comments-core`.
//!
//! # Overview
//! Exposes the comments request builder and response parser through
//! `extern "C"` functions so a mobile host with its own HTTP stack can fetch
//! the list and receive a `NetworkResult`-shaped value without linking to
//! Rust's async runtime or serde directly.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `comments_build_get_comments` / `comments_parse_get_comments` mirror the
//!   core API 1:1.
//! - Parse failures are collapsed into the same message-only `Error` variant
//!   the repository produces, including the fallback message.
//! - The C caller owns all returned pointers and must call the matching
//!   `comments_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use comments_core::http::HttpResponse;
use comments_core::NetworkResult;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `CommentsClient` bound to `base_url`.
///
/// Returns null if `base_url` is null, not UTF-8, or if an internal panic
/// occurs. The caller must free the returned pointer with
/// `comments_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn comments_client_new(base_url: *const c_char) -> *mut FfiCommentsClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        let client = comments_core::CommentsClient::new(url);
        Box::into_raw(Box::new(FfiCommentsClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Create a client for the public jsonplaceholder endpoint.
#[unsafe(no_mangle)]
pub extern "C" fn comments_client_new_default() -> *mut FfiCommentsClient {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiCommentsClient {
            inner: comments_core::CommentsClient::default(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `comments_client_new*`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn comments_client_free(client: *mut FfiCommentsClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// Build the HTTP request for the comments list.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `comments_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn comments_build_get_comments(
    client: *const FfiCommentsClient,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_get_comments())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is an
/// empty body; a non-UTF-8 body is decoded lossily so the parser reports it.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_string_lossy()
            .into_owned()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse the response of a comments request into a `NetworkResult`.
///
/// Never returns null. Null arguments produce an `Error` result.
/// The caller must free the returned pointer with `comments_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn comments_parse_get_comments(
    client: *const FfiCommentsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiNetworkResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiNetworkResult::null_arg("client");
        }
        if response.is_null() {
            return FfiNetworkResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let result: NetworkResult<_> = client
            .inner
            .parse_get_comments(ffi_response_to_core(resp))
            .into();
        FfiNetworkResult::from_core(result)
    })
    .unwrap_or_else(|_| FfiNetworkResult::panic("panic in comments_parse_get_comments"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `comments_build_get_comments`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn comments_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiNetworkResult` returned by `comments_parse_get_comments`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn comments_free_result(result: *mut FfiNetworkResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if !result.comments.is_null() && result.len > 0 {
            let items = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    result.comments,
                    result.len as usize,
                ))
            };
            for item in items.iter() {
                free_c_string(item.name);
                free_c_string(item.email);
                free_c_string(item.body);
            }
        }
    });
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn comments_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn new_client() -> *mut FfiCommentsClient {
        let url = CString::new("http://localhost:3000").unwrap();
        comments_client_new(url.as_ptr())
    }

    fn c_str<'a>(ptr: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    fn parse(client: *const FfiCommentsClient, status: u16, body: &str) -> *mut FfiNetworkResult {
        let body = CString::new(body).unwrap();
        let resp = FfiHttpResponse {
            status,
            body: body.as_ptr(),
        };
        comments_parse_get_comments(client, &resp)
    }

    #[test]
    fn client_new_and_free() {
        let client = new_client();
        assert!(!client.is_null());
        comments_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        assert!(comments_client_new(std::ptr::null()).is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        comments_client_free(std::ptr::null_mut());
    }

    #[test]
    fn build_get_comments_returns_correct_request() {
        let client = new_client();
        let req = comments_build_get_comments(client);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Get));
        assert_eq!(c_str(req_ref.path), "http://localhost:3000/comments");
        assert!(req_ref.body.is_null());
        assert_eq!(req_ref.headers_len, 1);

        let header = unsafe { &*req_ref.headers };
        assert_eq!(c_str(header.key), "accept");
        assert_eq!(c_str(header.value), "application/json");

        comments_free_request(req);
        comments_client_free(client);
    }

    #[test]
    fn default_client_targets_jsonplaceholder() {
        let client = comments_client_new_default();
        let req = comments_build_get_comments(client);
        let path = c_str(unsafe { &*req }.path);
        assert_eq!(path, "https://jsonplaceholder.typicode.com/comments");

        comments_free_request(req);
        comments_client_free(client);
    }

    #[test]
    fn build_get_comments_null_client_returns_null() {
        assert!(comments_build_get_comments(std::ptr::null()).is_null());
    }

    #[test]
    fn parse_empty_list() {
        let client = new_client();
        let result = parse(client, 200, "[]");

        let r = unsafe { &*result };
        assert!(matches!(r.tag, FfiResultTag::Success));
        assert!(r.error_message.is_null());
        assert!(r.comments.is_null());
        assert_eq!(r.len, 0);

        comments_free_result(result);
        comments_client_free(client);
    }

    #[test]
    fn parse_two_comments() {
        let client = new_client();
        let result = parse(
            client,
            200,
            r#"[
                {"postId":1,"id":1,"name":"first","email":"a@x.io","body":"one"},
                {"postId":2,"id":6,"name":"second","email":"b@x.io","body":"two","extra":true}
            ]"#,
        );
        let r = unsafe { &*result };
        assert!(matches!(r.tag, FfiResultTag::Success));
        assert_eq!(r.len, 2);

        let items = unsafe { std::slice::from_raw_parts(r.comments, r.len as usize) };
        assert_eq!(items[0].id, 1);
        assert_eq!(c_str(items[0].name), "first");
        assert_eq!(items[1].post_id, 2);
        assert_eq!(c_str(items[1].email), "b@x.io");
        assert_eq!(c_str(items[1].body), "two");

        comments_free_result(result);
        comments_client_free(client);
    }

    #[test]
    fn parse_http_error_carries_message() {
        let client = new_client();
        let result = parse(client, 503, "down");
        let r = unsafe { &*result };
        assert!(matches!(r.tag, FfiResultTag::Error));
        assert_eq!(c_str(r.error_message), "HTTP 503: down");
        assert!(r.comments.is_null());

        comments_free_result(result);
        comments_client_free(client);
    }

    #[test]
    fn parse_malformed_json_is_error() {
        let client = new_client();
        let result = parse(client, 200, "[{");
        let r = unsafe { &*result };
        assert!(matches!(r.tag, FfiResultTag::Error));
        assert!(c_str(r.error_message).starts_with("deserialization failed"));

        comments_free_result(result);
        comments_client_free(client);
    }

    #[test]
    fn parse_null_body_is_treated_as_empty() {
        let client = new_client();
        let resp = FfiHttpResponse {
            status: 200,
            body: std::ptr::null(),
        };
        let result = comments_parse_get_comments(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.tag, FfiResultTag::Error));

        comments_free_result(result);
        comments_client_free(client);
    }

    #[test]
    fn parse_null_client_returns_error() {
        let result = parse(std::ptr::null(), 200, "[]");
        let r = unsafe { &*result };
        assert!(matches!(r.tag, FfiResultTag::Error));
        assert_eq!(c_str(r.error_message), "null argument: client");

        comments_free_result(result);
    }

    #[test]
    fn parse_null_response_returns_error() {
        let client = new_client();
        let result = comments_parse_get_comments(client, std::ptr::null());
        let r = unsafe { &*result };
        assert_eq!(c_str(r.error_message), "null argument: response");

        comments_free_result(result);
        comments_client_free(client);
    }

    #[test]
    fn free_request_null_is_safe() {
        comments_free_request(std::ptr::null_mut());
    }

    #[test]
    fn free_result_null_is_safe() {
        comments_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_string_null_is_safe() {
        comments_free_string(std::ptr::null_mut());
    }

    #[test]
    fn host_round_trip_against_mock_server() {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        let url = CString::new(format!("http://{addr}")).unwrap();
        let client = comments_client_new(url.as_ptr());
        let req = comments_build_get_comments(client);

        // Host side: execute the request the way a mobile app would.
        let path = c_str(unsafe { &*req }.path).to_string();
        let mut response = ureq::get(&path).call().unwrap();
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap();

        let result = parse(client, status, &body);
        let r = unsafe { &*result };
        assert!(matches!(r.tag, FfiResultTag::Success));
        assert_eq!(r.len as usize, mock_server::fixture().len());

        comments_free_result(result);
        comments_free_request(req);
        comments_client_free(client);
    }

    #[test]
    fn header_is_generated_into_out_dir() {
        let path = std::path::Path::new(env!("OUT_DIR")).join("comments_ffi.h");
        let header = std::fs::read_to_string(&path).unwrap();
        assert!(header.contains("COMMENTS_FFI_H"));
        assert!(header.contains("comments_parse_get_comments"));
        assert!(header.contains("FfiNetworkResult"));
    }
}
