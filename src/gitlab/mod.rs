/// GitLab REST layer: endpoint construction, request, response decoding.
pub mod client;
pub mod errors;

pub use client::GitLabClient;
pub use errors::GitLabError;
