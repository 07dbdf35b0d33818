//! AWS client construction.

use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_route53::Client;
use log::debug;

use crate::config::DEFAULT_AWS_REGION;

/// Builds a Route53 client from the ambient AWS configuration.
///
/// Credentials come from the default provider chain (environment, shared
/// config files, instance metadata). Passing a profile name restricts the
/// chain to that profile. Route53 is a global service, so the region only
/// matters for signing; when none is configured the client falls back to
/// us-east-1.
///
/// # Arguments
///
/// * `profile` - Optional named profile from the shared AWS config files
///
/// # Returns
///
/// A configured Route53 client.
pub async fn build_client(profile: Option<&str>) -> Client {
    let region = RegionProviderChain::default_provider().or_else(DEFAULT_AWS_REGION);
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);
    if let Some(profile) = profile {
        debug!("Using AWS profile {}", profile);
        loader = loader.profile_name(profile);
    }
    let shared_config = loader.load().await;
    Client::new(&shared_config)
}
