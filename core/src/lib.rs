//! Templated REST resources over a blocking HTTP client.
//!
//! # Overview
//! A `Resource` is built from a URL template such as
//! `https://{domain}/{path1}/{path2}`. Callers fill the placeholders,
//! register query params, headers and body fields, then issue GET, PUT,
//! PATCH, POST or DELETE. Each call returns a `Response` carrying the status
//! code and the body parsed as JSON, or `None` when the body is not JSON.
//!
//! # Design
//! - Placeholder names are fixed by the template; reading or writing any
//!   other name is an `UnknownPlaceholder` error.
//! - Rendering an incomplete template is a `TemplateIncomplete` error, so no
//!   call is ever made against a half-filled URL.
//! - Network I/O sits behind the `HttpClient` trait. `UreqClient` is the
//!   default implementation; tests substitute a recording client.
//! - Transport errors are passed through boxed and untranslated.
//!
//! ```no_run
//! use resourcer::Resource;
//!
//! let mut resource = Resource::new("https://{domain}/{path1}/{path2}");
//! resource.set("domain", "example.com")?;
//! resource.set("path1", "tag")?;
//! resource.set("path2", "coding")?;
//! resource.param("page", "2").header("accept", "application/json");
//!
//! let response = resource.get()?;
//! println!("{} {:?}", response.status, response.body);
//! # Ok::<(), resourcer::ResourceError>(())
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod resource;
pub mod response;
pub mod template;

pub use client::{ClientConfig, UreqClient};
pub use error::{ResourceError, TransportError};
pub use http::{HttpClient, HttpMethod, RawResponse, RequestBody};
pub use resource::Resource;
pub use response::Response;
pub use template::Template;
