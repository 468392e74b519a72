//! Network side of the builder: posting the finished field configuration.

mod submit;

pub use submit::{
    SubmitOutcome, SubmitReceipt, SubmitRequest, build_client, post_field_config, submit,
};
