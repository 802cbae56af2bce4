//! Campaign analysis — turns an uploaded campaign image plus a text brief
//! into the three-part provider critique.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod sections;
