//! # procdef-editor-http
//!
//! [`HttpTransport`] implements the editor's `Transport` trait on top of
//! reqwest. It works natively and on `wasm32`, where reqwest uses the
//! browser's `fetch`.
//!
//! ```rust,no_run
//! use procdef_editor_core::{Action, ActionRequest, EditorConfig, FormState, Transport};
//! use procdef_editor_http::HttpTransport;
//!
//! # async fn demo() -> procdef_editor_core::EditorResult<()> {
//! let config = EditorConfig {
//!     base_url: Some("https://admin.example.com/".into()),
//!     ..EditorConfig::default()
//! };
//! let transport = HttpTransport::new(&config)?;
//! let form = FormState::new().with("name", "orders").with("text", "...");
//! let request = ActionRequest::new(Action::Validate, form, 1);
//! let response = transport
//!     .submit("/zato/process/definition/create/1/", &request, config.action_encoding)
//!     .await?;
//! println!("{}: {}", response.status_text, response.response_text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: rustls TLS backend.
//! - **`native-tls`**: the platform's TLS implementation.

mod transport;

pub use transport::{status_text, HttpTransport, CSRF_FIELD, CSRF_HEADER};
