//! HTTP request composition types

mod body;
mod descriptor;
mod draft;
mod method;
mod row;

pub use body::{BodySetting, ContentTypeChoice};
pub use descriptor::{DescriptorHeaders, REDACTED, RequestDescriptor, redact_header_value};
pub use draft::RequestDraft;
pub use method::HttpMethod;
pub use row::FieldRow;
