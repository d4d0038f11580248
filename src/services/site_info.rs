use std::future::Future;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SiteGeneral {
    pub name: String,
}

/// Collaborator exposing site-wide display settings.
pub trait SiteInfoProvider: Clone + Send + Sync + 'static {
    fn get_site_general(&self) -> impl Future<Output = Result<SiteGeneral>> + Send;
}

/// Site settings sourced from the process configuration.
#[derive(Clone)]
pub struct ConfigSiteInfo {
    name: String,
}

impl ConfigSiteInfo {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl SiteInfoProvider for ConfigSiteInfo {
    async fn get_site_general(&self) -> Result<SiteGeneral> {
        Ok(SiteGeneral {
            name: self.name.clone(),
        })
    }
}
