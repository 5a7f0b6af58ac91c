pub mod a001_resource;
pub mod a002_resource_submission;
