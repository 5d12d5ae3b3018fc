//! Custom request extractors.

mod page_form;
mod validated_json;

pub use page_form::PageForm;
pub use validated_json::ValidatedJson;
