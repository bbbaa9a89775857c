//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use comments_core::http::HttpMethod;
use comments_core::{Comment, NetworkResult};

/// Opaque handle to a `CommentsClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiCommentsClient {
    pub(crate) inner: comments_core::CommentsClient,
}

/// Convert to an owned C string, dropping interior NUL bytes.
pub(crate) fn to_c_string(s: String) -> *mut c_char {
    let c_string = CString::new(s).unwrap_or_else(|err| {
        let mut bytes = err.into_vec();
        bytes.retain(|&b| b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    c_string.into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `comments_build_get_comments`. The C caller executes the request
/// and passes the response back through `comments_parse_get_comments`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: comments_core::HttpRequest) -> *mut Self {
        let path = to_c_string(req.path);
        let body = match req.body {
            Some(b) => to_c_string(b),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to `comments_parse_get_comments`. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which `NetworkResult` variant an `FfiNetworkResult` holds.
#[repr(C)]
pub enum FfiResultTag {
    Success = 0,
    Error = 1,
}

/// A single comment exposed to C.
#[repr(C)]
pub struct FfiComment {
    pub post_id: u64,
    pub id: u64,
    pub name: *mut c_char,
    pub email: *mut c_char,
    pub body: *mut c_char,
}

impl FfiComment {
    fn from_core(comment: Comment) -> Self {
        FfiComment {
            post_id: comment.post_id,
            id: comment.id,
            name: to_c_string(comment.name),
            email: to_c_string(comment.email),
            body: to_c_string(comment.body),
        }
    }
}

/// `NetworkResult<Vec<Comment>>` for C.
///
/// On `Success`, `error_message` is null and `comments` points to `len`
/// items (null when `len` is 0). On `Error`, `error_message` is a non-empty
/// C string and `comments` is null.
#[repr(C)]
pub struct FfiNetworkResult {
    pub tag: FfiResultTag,
    pub error_message: *mut c_char,
    pub comments: *mut FfiComment,
    pub len: u32,
}

impl FfiNetworkResult {
    pub(crate) fn from_core(result: NetworkResult<Vec<Comment>>) -> *mut Self {
        match result {
            NetworkResult::Success(comments) => Self::success(comments),
            NetworkResult::Error(message) => Self::error(message),
        }
    }

    fn success(comments: Vec<Comment>) -> *mut Self {
        let len = comments.len() as u32;
        let items = if comments.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_comments: Box<[FfiComment]> =
                comments.into_iter().map(FfiComment::from_core).collect();
            Box::into_raw(ffi_comments) as *mut FfiComment
        };

        Box::into_raw(Box::new(FfiNetworkResult {
            tag: FfiResultTag::Success,
            error_message: std::ptr::null_mut(),
            comments: items,
            len,
        }))
    }

    fn error(message: String) -> *mut Self {
        Box::into_raw(Box::new(FfiNetworkResult {
            tag: FfiResultTag::Error,
            error_message: to_c_string(message),
            comments: std::ptr::null_mut(),
            len: 0,
        }))
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(msg.to_string())
    }
}
